//! URL normalization, query helpers and strict validation.
//!
//! This module contains the pieces layered around the core parser:
//! - Host, port and percent-encoding normalization
//! - Query-string encoding and decoding
//! - The validating `parse_strict` wrapper

pub mod normalizer;
pub mod query;
pub mod strict;

// Re-export main functionality
pub use normalizer::{encode_component, normalize_hostname, normalize_port};
pub use query::{parse_pairs, serialize_pairs};
pub use strict::{parse_strict, validate_host};
