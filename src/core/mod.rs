//! Core parsing and serialization.
//!
//! - Scanning a string into URL components
//! - Splitting the authority into userinfo, host and port
//! - Serializing components back into a canonical string

pub mod authority;
pub mod formatter;
pub mod parser;

// Re-export main functionality
pub use authority::{parse_authority, Authority};
pub use formatter::format;
pub use parser::parse;
