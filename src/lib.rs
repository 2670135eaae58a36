//! legacy-url - Permissive URL parsing and serialization
//!
//! This crate splits a URL string into the classic set of fields
//! (`protocol`, `auth`, `host`, `hostname`, `port`, `pathname`, `search`,
//! `query`, `hash`, `path`, `href`) and serializes such fields back into a
//! canonical string.
//!
//! # Features
//!
//! - **Total**: [`parse`] accepts any string and never fails
//! - **Canonical**: lower-cased scheme and host, IDNA hosts, default ports
//!   dropped, unsafe characters percent-encoded
//! - **Stable**: `parse(format(parse(s)))` equals `parse(s)`
//! - **Strict mode**: [`parse_strict`] rejects what a validating parser would
//!
//! # Quick Start
//!
//! ```
//! use legacy_url::{format, parse, parse_strict, Query, UrlComponents};
//!
//! let url = parse("https://user@Example.com:443/a/b?x=1#frag");
//! assert_eq!(url.hostname(), Some("example.com"));
//! assert_eq!(url.port(), None); // default port
//! assert_eq!(url.path(), Some("/a/b?x=1"));
//! assert_eq!(url.href(), "https://user@example.com/a/b?x=1#frag");
//!
//! // Mail addresses are opaque: no host, the address is the path
//! let mail = parse("mailto:foo@example.com");
//! assert!(!mail.slashes());
//! assert_eq!(mail.pathname(), Some("foo@example.com"));
//!
//! // Build a URL from parts
//! let href = format(&UrlComponents {
//!     protocol: Some("http".into()),
//!     hostname: Some("example.com".into()),
//!     pathname: Some("/search".into()),
//!     query: Some(Query::Pairs(vec![("q".into(), "rust url".into())])),
//!     ..Default::default()
//! });
//! assert_eq!(href, "http://example.com/search?q=rust%20url");
//!
//! // Validate
//! assert!(parse_strict("http://host:abc/").is_err());
//! ```
//!
//! # Parsing rules
//!
//! | Input | Outcome |
//! |-------|---------|
//! | `http://a@b@c.com/` | the last `@` ends the userinfo: auth `a@b` |
//! | `http://host:abc/` | non-numeric port stays in the hostname |
//! | `http:example.com` | special schemes always get an authority |
//! | `javascript://x` | never an authority |
//! | `//host/p` | protocol-relative, host parsed |
//! | `http://[::1]:80/` | IPv6 hostname keeps its brackets |
//!
//! # Error Handling
//!
//! Only [`parse_strict`] and the conformance helpers return
//! `Result<T, UrlError>`.

// Re-export main parsing and formatting functions
pub use crate::core::{format, parse};

// Re-export the validating layer
pub use crate::url::strict::parse_strict;

// Re-export public types
pub use error::UrlError;
pub use scheme::{scheme_info, SchemeInfo, SchemeKind};
pub use types::{ParsedUrl, Query, UrlComponents};

// Module declarations
pub mod conformance;
pub mod core;
pub mod error;
pub mod scheme;
pub mod types;
pub mod url;
