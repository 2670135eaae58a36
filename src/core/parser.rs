//! The permissive URL parser.

use std::borrow::Cow;

use tracing::trace;

use crate::core::authority::{authority_end, parse_authority};
use crate::scheme::{is_file, scheme_info, SchemeInfo};
use crate::types::{ParsedUrl, Parts};
use crate::url::normalizer::{
    encode_component, FRAGMENT, OPAQUE_PATH, PATH, QUERY, SPECIAL_QUERY,
};

/// Parse a URL string into its components.
///
/// This never fails: malformed pieces end up as absent or empty fields.
/// Use [`parse_strict`](crate::parse_strict) to reject invalid input.
///
/// ```
/// use legacy_url::parse;
///
/// let url = parse("HTTP://user:pw@Example.com:8080/p/a/t/h?query=string#hash");
/// assert_eq!(url.protocol(), Some("http:"));
/// assert_eq!(url.auth(), Some("user:pw"));
/// assert_eq!(url.host(), Some("example.com:8080"));
/// assert_eq!(url.pathname(), Some("/p/a/t/h"));
/// assert_eq!(url.search(), Some("?query=string"));
/// assert_eq!(url.hash(), Some("#hash"));
/// ```
pub fn parse(input: &str) -> ParsedUrl {
    let cleaned = clean_input(input);
    let (protocol, rest) = split_scheme(&cleaned);
    let scheme = protocol.as_deref().map(scheme_info);
    let special = scheme.map_or(false, |info| info.is_special());
    let hostless = scheme.map_or(false, |info| info.is_hostless());
    trace!(?protocol, "scheme");

    let rest = if special {
        backslashes_to_slashes(rest)
    } else {
        Cow::Borrowed(rest)
    };

    let (slashes, authority, remainder) = split_authority(&rest, protocol.as_deref(), scheme);
    trace!(slashes, ?authority, remainder, "authority");

    let (before_hash, hash) = split_off(remainder, '#');
    let (path_text, search) = split_off(before_hash, '?');

    let opaque = authority.is_none() && scheme.is_some();
    let encode = |text: &str, set| {
        if hostless {
            text.to_string()
        } else {
            encode_component(text, set)
        }
    };

    let mut pathname = if path_text.is_empty() {
        None
    } else {
        Some(encode(path_text, if opaque { OPAQUE_PATH } else { PATH }))
    };
    if authority.is_some() {
        pathname = match pathname {
            None if special || scheme.is_none() => Some("/".to_string()),
            Some(path) if !path.starts_with('/') => Some(format!("/{}", path)),
            other => other,
        };
    }

    let authority = authority.map(|text| parse_authority(text, scheme));
    let (auth, hostname, port) = match authority {
        Some(authority) => (authority.auth, Some(authority.hostname), authority.port),
        None => (None, None, None),
    };

    ParsedUrl::from_parts(Parts {
        protocol,
        slashes,
        auth,
        hostname,
        port,
        pathname,
        search: search.map(|text| encode(text, if special { SPECIAL_QUERY } else { QUERY })),
        hash: hash.map(|text| encode(text, FRAGMENT)),
    })
}

/// Trim leading/trailing spaces and C0 controls, drop tabs and newlines.
fn clean_input(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if trimmed.contains(|c: char| matches!(c, '\t' | '\n' | '\r')) {
        Cow::Owned(trimmed.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Split a leading `scheme:`; the scheme is returned lower-cased with its colon.
fn split_scheme(input: &str) -> (Option<String>, &str) {
    let mut chars = input.char_indices();
    match chars.next() {
        Some((_, first)) if first.is_ascii_alphabetic() => {}
        _ => return (None, input),
    }

    for (i, c) in chars {
        match c {
            ':' => return (Some(input[..=i].to_ascii_lowercase()), &input[i + 1..]),
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {}
            _ => break,
        }
    }
    (None, input)
}

/// Turn `\` into `/` up to the first `?` or `#`.
fn backslashes_to_slashes(rest: &str) -> Cow<'_, str> {
    let end = rest.find(|c: char| c == '?' || c == '#').unwrap_or(rest.len());
    if !rest[..end].contains('\\') {
        return Cow::Borrowed(rest);
    }
    Cow::Owned(format!("{}{}", rest[..end].replace('\\', "/"), &rest[end..]))
}

/// Decide whether an authority follows and cut it out.
///
/// Returns `(slashes, authority, remainder)`.
fn split_authority<'a>(
    rest: &'a str,
    protocol: Option<&str>,
    scheme: Option<SchemeInfo>,
) -> (bool, Option<&'a str>, &'a str) {
    let after_slashes = rest.strip_prefix("//");

    match scheme {
        None => match after_slashes {
            Some(after) => take_authority(after),
            None => (true, None, rest),
        },
        Some(info) if info.is_hostless() => (false, None, rest),
        Some(info) if info.is_special() => {
            if protocol.map_or(false, is_file) {
                match after_slashes {
                    Some(after) => take_authority(after),
                    None => (true, Some(""), rest),
                }
            } else {
                take_authority(rest.trim_start_matches('/'))
            }
        }
        Some(_) => match after_slashes {
            Some(after) => take_authority(after),
            None => (false, None, rest),
        },
    }
}

fn take_authority(after: &str) -> (bool, Option<&str>, &str) {
    let end = authority_end(after);
    (true, Some(&after[..end]), &after[end..])
}

/// Split at the first `delimiter`; the second part keeps the delimiter.
fn split_off(text: &str, delimiter: char) -> (&str, Option<&str>) {
    match text.find(delimiter) {
        Some(at) => (&text[..at], Some(&text[at..])),
        None => (text, None),
    }
}
