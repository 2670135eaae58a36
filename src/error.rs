//! Error types for strict URL validation and fixture reading.
//!
//! The permissive [`parse`](crate::parse) never fails; these errors only come
//! out of [`parse_strict`](crate::parse_strict) and the conformance helpers.

use thiserror::Error;

/// Errors reported by the validating layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// The input was empty or only whitespace.
    #[error("Empty input")]
    EmptyInput,

    /// The input has no `scheme:` prefix.
    #[error("URL has no scheme")]
    MissingScheme,

    /// A special scheme (http, https, ftp, ...) was given no host.
    #[error("Scheme {0} requires a host")]
    MissingHost(String),

    /// The hostname contains characters that cannot appear in a host.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// The text after the host's `:` is not a decimal port.
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),

    /// The port does not fit in 16 bits.
    #[error("Port out of range: {0}")]
    PortOutOfRange(String),

    /// A conformance fixture line could not be used.
    #[error("Invalid fixture at line {line}: {reason}")]
    InvalidFixture { line: usize, reason: String },

    /// The WHATWG parser of the `url` crate refused the input.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::UrlParseError(err.to_string())
    }
}
