//! Validating layer on top of the permissive parser.

use std::net::Ipv6Addr;

use tracing::debug;
use url::Url;

use crate::core::parser::parse;
use crate::error::UrlError;
use crate::scheme::{is_file, scheme_info};
use crate::types::ParsedUrl;
use crate::url::normalizer::is_ipv6_literal;

/// Code points that may not appear in a hostname.
const FORBIDDEN_HOST_CHARS: &[char] = &[
    ' ', '#', '/', '<', '>', '?', '@', '[', '\\', ']', '^', '|',
];

const MAX_HOST_LEN: usize = 255;

/// Parse a URL and reject what a validating parser would refuse.
///
/// On success the returned record is exactly what [`parse`] produces.
///
/// ```
/// use legacy_url::{parse_strict, UrlError};
///
/// assert!(parse_strict("https://example.com/").is_ok());
/// assert_eq!(parse_strict("/relative"), Err(UrlError::MissingScheme));
/// assert!(matches!(parse_strict("http://host:abc/"), Err(UrlError::InvalidPort(_))));
/// ```
pub fn parse_strict(input: &str) -> Result<ParsedUrl, UrlError> {
    let result = validate(input);
    if let Err(err) = &result {
        debug!(input, %err, "strict parse rejected input");
    }
    result
}

fn validate(input: &str) -> Result<ParsedUrl, UrlError> {
    if input.trim().is_empty() {
        return Err(UrlError::EmptyInput);
    }

    let parsed = parse(input);
    let protocol = parsed.protocol().ok_or(UrlError::MissingScheme)?;
    let info = scheme_info(protocol);

    let hostname = parsed.hostname().unwrap_or("");
    if info.is_special() && !is_file(protocol) && hostname.is_empty() {
        return Err(UrlError::MissingHost(protocol.to_string()));
    }
    if !hostname.is_empty() {
        validate_host(hostname)?;
    }

    if let Some(port) = parsed.port() {
        port.parse::<u16>()
            .map_err(|_| UrlError::PortOutOfRange(port.to_string()))?;
    }

    Url::parse(input)?;
    Ok(parsed)
}

/// Validate a hostname produced by the permissive parser.
///
/// Bracketed hosts must be IPv6 addresses. Other hosts must not keep a `:`
/// (that means the port was not numeric), must avoid forbidden code points,
/// and must fit in 255 bytes.
pub fn validate_host(host: &str) -> Result<(), UrlError> {
    if is_ipv6_literal(host) {
        return host[1..host.len() - 1]
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| UrlError::InvalidHost(host.to_string()));
    }

    if let Some((_, port)) = host.rsplit_once(':') {
        return Err(UrlError::InvalidPort(port.to_string()));
    }

    if host.len() > MAX_HOST_LEN {
        return Err(UrlError::InvalidHost(format!(
            "hostname exceeds {} bytes",
            MAX_HOST_LEN
        )));
    }

    if host.contains(FORBIDDEN_HOST_CHARS) {
        return Err(UrlError::InvalidHost(host.to_string()));
    }

    Ok(())
}
