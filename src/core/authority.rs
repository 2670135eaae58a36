//! Splitting of the `userinfo@host:port` segment.

use std::net::Ipv6Addr;

use tracing::trace;

use crate::scheme::SchemeInfo;
use crate::url::normalizer::{is_ipv6_literal, normalize_hostname, normalize_port};

/// Parsed pieces of an authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub auth: Option<String>,
    pub hostname: String,
    pub port: Option<String>,
}

/// Length of the authority at the start of `rest`: everything up to the
/// first `/`, `?` or `#`.
pub fn authority_end(rest: &str) -> usize {
    rest.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len())
}

/// Parse an authority. `scheme` is `None` for scheme-less input.
///
/// The last `@` separates userinfo from the host. A port is only split off
/// when it is all digits; otherwise the whole text stays in the hostname.
pub fn parse_authority(text: &str, scheme: Option<SchemeInfo>) -> Authority {
    let (auth, host_port) = match text.rfind('@') {
        Some(at) => (Some(text[..at].to_string()), &text[at + 1..]),
        None => (None, text),
    };

    let (hostname, port) = split_host_port(host_port);
    if port.is_none() && hostname.contains(':') && !is_ipv6_literal(hostname) {
        trace!(hostname, "no numeric port, keeping text in hostname");
    }

    let uses_idna = scheme.map_or(true, |info| info.is_special());
    let hostname = if hostname.parse::<Ipv6Addr>().is_ok() {
        format!("[{}]", hostname)
    } else if is_ipv6_literal(hostname) {
        hostname.to_string()
    } else if uses_idna {
        normalize_hostname(hostname)
    } else {
        hostname.to_lowercase()
    };

    Authority {
        auth,
        hostname,
        port: port.and_then(|digits| normalize_port(digits, scheme)),
    }
}

/// Split `host[:port]`. The returned port is non-empty and all digits.
///
/// Outside brackets the whole trailing run of `:digits` groups is removed
/// from the host, so the host never ends in `:` or `:digits`. The last
/// non-empty group is the port. Unbracketed IPv6 addresses are kept whole,
/// or split at the last colon when the rest is an address.
fn split_host_port(text: &str) -> (&str, Option<&str>) {
    if text.starts_with('[') {
        if let Some(close) = text.find(']') {
            let (literal, tail) = text.split_at(close + 1);
            if tail.is_empty() {
                return (literal, None);
            }
            return match tail.strip_prefix(':') {
                Some(port) if is_digits(port) => (literal, non_empty(port)),
                _ => (text, None),
            };
        }
    }

    if let Some((host, port)) = text.rsplit_once(':') {
        if !port.is_empty() && is_digits(port) && host.parse::<Ipv6Addr>().is_ok() {
            return (host, Some(port));
        }
    }
    if text.parse::<Ipv6Addr>().is_ok() {
        return (text, None);
    }

    let mut end = text.len();
    let mut port = None;
    while let Some(colon) = text[..end].rfind(':') {
        let digits = &text[colon + 1..end];
        if !is_digits(digits) {
            break;
        }
        port = port.or_else(|| non_empty(digits));
        end = colon;
    }
    (&text[..end], port)
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::scheme_info;

    fn http(text: &str) -> Authority {
        parse_authority(text, Some(scheme_info("http")))
    }

    #[test]
    fn test_authority_end() {
        assert_eq!(authority_end("host/path"), 4);
        assert_eq!(authority_end("host?q#f"), 4);
        assert_eq!(authority_end("host#f/x"), 4);
        assert_eq!(authority_end("host"), 4);
        assert_eq!(authority_end(""), 0);
    }

    #[test]
    fn test_host_and_port() {
        let authority = http("Example.COM:8080");
        assert_eq!(authority.auth, None);
        assert_eq!(authority.hostname, "example.com");
        assert_eq!(authority.port, Some("8080".to_string()));
    }

    #[test]
    fn test_last_at_separates_userinfo() {
        let authority = http("a@b@c.com");
        assert_eq!(authority.auth, Some("a@b".to_string()));
        assert_eq!(authority.hostname, "c.com");
    }

    #[test]
    fn test_userinfo_kept_verbatim() {
        let authority = http("User:P%40ss@host");
        assert_eq!(authority.auth, Some("User:P%40ss".to_string()));
        assert_eq!(authority.hostname, "host");
    }

    #[test]
    fn test_non_digit_port_stays_in_hostname() {
        let authority = http("host:abc");
        assert_eq!(authority.hostname, "host:abc");
        assert_eq!(authority.port, None);
    }

    #[test]
    fn test_empty_port_dropped() {
        let authority = http("host:");
        assert_eq!(authority.hostname, "host");
        assert_eq!(authority.port, None);
    }

    #[test]
    fn test_trailing_colons_removed() {
        let empty = http("host::");
        assert_eq!(empty.hostname, "host");
        assert_eq!(empty.port, None);

        let elided = http("h::80");
        assert_eq!(elided.hostname, "h");
        assert_eq!(elided.port, None);

        let kept = http("h:5:8080");
        assert_eq!(kept.hostname, "h");
        assert_eq!(kept.port, Some("8080".to_string()));

        let last_non_empty = http("a:1::");
        assert_eq!(last_non_empty.hostname, "a");
        assert_eq!(last_non_empty.port, Some("1".to_string()));
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("host:abc"), ("host:abc", None));
        assert_eq!(split_host_port("a:b:"), ("a:b", None));
        assert_eq!(split_host_port(":80"), ("", Some("80")));
        assert_eq!(split_host_port("::"), ("::", None));
        assert_eq!(split_host_port("1::2:8080"), ("1::2", Some("8080")));
    }

    #[test]
    fn test_default_port_elided() {
        assert_eq!(http("host:80").port, None);
        assert_eq!(http("host:0081").port, Some("81".to_string()));
    }

    #[test]
    fn test_ipv6_literal() {
        let authority = http("[FE80::1]:8080");
        assert_eq!(authority.hostname, "[FE80::1]");
        assert_eq!(authority.port, Some("8080".to_string()));

        let bare = http("[::1]");
        assert_eq!(bare.hostname, "[::1]");
        assert_eq!(bare.port, None);

        let junk = http("[::1]x");
        assert_eq!(junk.hostname, "[::1]x");
        assert_eq!(junk.port, None);
    }

    #[test]
    fn test_unbracketed_ipv6_gets_brackets() {
        let authority = http("1::2:8080");
        assert_eq!(authority.hostname, "[1::2]");
        assert_eq!(authority.port, Some("8080".to_string()));
    }

    #[test]
    fn test_case_folded_for_every_scheme() {
        let authority = parse_authority("Host.Example", Some(scheme_info("foo")));
        assert_eq!(authority.hostname, "host.example");

        let no_idna = parse_authority("Caf\u{c9}.Example", Some(scheme_info("foo")));
        assert_eq!(no_idna.hostname, "caf\u{e9}.example");

        let scheme_less = parse_authority("Host.Example", None);
        assert_eq!(scheme_less.hostname, "host.example");
    }
}
