//! Normalization applied while parsing: host case folding, IDNA, port
//! canonicalization, and percent-encoding of characters that cannot appear
//! literally in a component.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::trace;

use crate::scheme::SchemeInfo;

/// Characters encoded in hierarchical paths.
pub const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters encoded in opaque paths (`mailto:`, unknown schemes).
pub const OPAQUE_PATH: &AsciiSet = CONTROLS;

/// Characters encoded in the query of non-special schemes.
pub const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>');

/// Characters encoded in the query of special schemes.
pub const SPECIAL_QUERY: &AsciiSet = &QUERY.add(b'\'');

/// Characters encoded in the fragment.
pub const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Percent-encode `input` with `set`. Existing `%XX` escapes are left alone,
/// so applying this twice changes nothing.
pub fn encode_component(input: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, set).to_string()
}

/// Normalize a hostname of a special or scheme-less URL.
///
/// ASCII hostnames are lower-cased. Non-ASCII hostnames go through IDNA
/// ToASCII; when IDNA rejects them they are only lower-cased.
pub fn normalize_hostname(host: &str) -> String {
    if host.is_ascii() {
        return host.to_ascii_lowercase();
    }

    match idna::domain_to_ascii(host) {
        Ok(ascii) => ascii,
        Err(_) => {
            trace!(host, "IDNA rejected hostname, keeping lower-cased form");
            host.to_lowercase()
        }
    }
}

/// Whether `host` is a bracketed IPv6 literal such as `[::1]`.
pub fn is_ipv6_literal(host: &str) -> bool {
    host.len() >= 2 && host.starts_with('[') && host.ends_with(']')
}

/// Canonicalize a port: strip leading zeros and drop the scheme's default.
///
/// `digits` must be non-empty and all ASCII digits.
pub fn normalize_port(digits: &str, scheme: Option<SchemeInfo>) -> Option<String> {
    let trimmed = digits.trim_start_matches('0');
    let port = if trimmed.is_empty() { "0" } else { trimmed };

    if scheme.map_or(false, |info| info.is_default_port(port)) {
        trace!(port, "eliding default port");
        return None;
    }
    Some(port.to_string())
}
