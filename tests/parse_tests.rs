//! Tests for the permissive parser through the public API.

use legacy_url::*;

fn expected_host(url: &ParsedUrl) -> Option<String> {
    url.hostname().map(|hostname| match url.port() {
        Some(port) => format!("{}:{}", hostname, port),
        None => hostname.to_string(),
    })
}

fn expected_path(url: &ParsedUrl) -> Option<String> {
    if url.pathname().is_none() && url.search().is_none() {
        return None;
    }
    Some(format!("{}{}", url.pathname().unwrap_or(""), url.search().unwrap_or("")))
}

#[test]
fn test_multiple_at_signs() {
    let url = parse("http://a@b@c.com/");
    assert_eq!(url.auth(), Some("a@b"));
    assert_eq!(url.hostname(), Some("c.com"));
    assert_eq!(url.username(), Some("a@b"));
    assert_eq!(url.password(), None);
}

#[test]
fn test_opaque_scheme() {
    let url = parse("mailto:foo@example.com");
    assert_eq!(url.protocol(), Some("mailto:"));
    assert!(!url.slashes());
    assert_eq!(url.pathname(), Some("foo@example.com"));
    assert_eq!(url.hostname(), None);
    assert_eq!(url.host(), None);
}

#[test]
fn test_non_digit_port() {
    let url = parse("http://host:abc/");
    assert_eq!(url.hostname(), Some("host:abc"));
    assert_eq!(url.port(), None);
    assert_eq!(url.host(), Some("host:abc"));
}

#[test]
fn test_empty_input() {
    let url = parse("");
    assert_eq!(url.protocol(), None);
    assert_eq!(url.auth(), None);
    assert_eq!(url.host(), None);
    assert_eq!(url.pathname(), None);
    assert_eq!(url.search(), None);
    assert_eq!(url.hash(), None);
    assert_eq!(url.path(), None);
    assert_eq!(url.href(), "");
}

#[test]
fn test_default_port_is_dropped_while_parsing() {
    let url = parse("http://example.com:80/");
    assert_eq!(url.port(), None);
    assert_eq!(url.host(), Some("example.com"));
    assert_eq!(url.href(), "http://example.com/");

    let other = parse("http://example.com:443/");
    assert_eq!(other.port(), Some("443"));
}

#[test]
fn test_host_and_path_invariants() {
    let inputs = [
        "http://user:pw@example.com:8080/p?q#f",
        "https://[::1]:9443/x",
        "//host/only",
        "relative/path?x",
        "?only-query",
        "mailto:x@y?z",
        "file:///tmp",
        "foo://bar",
        "http://host:abc/",
        "",
    ];

    for input in inputs {
        let url = parse(input);
        assert_eq!(url.host().map(str::to_string), expected_host(&url), "host of {}", input);
        assert_eq!(url.path().map(str::to_string), expected_path(&url), "path of {}", input);
        if let Some(protocol) = url.protocol() {
            assert!(protocol.ends_with(':'), "protocol of {}", input);
        }
    }
}

#[test]
fn test_reparse_is_stable() {
    let inputs = [
        "HTTP://User@Example.COM:0080/a b?c d#e f",
        "http:\\\\example.com\\x",
        "https:example.com",
        "javascript:void(0)",
        "mailto:someone@example.com?subject=Hello World",
        "//Host.Example/path",
        "file:C:/Windows",
        "foo:/opaque path",
        "http://[FE80::1]:80/",
        "http://caf\u{e9}.example/\u{e9}t\u{e9}",
        "  http://trim.me/  ",
        "http://host::/",
        "http://::/",
        "http://h::80/",
        "http://a:1::/",
        "http://h:5:80/",
        "foo://Bar.Example/baz",
    ];

    for input in inputs {
        let first = parse(input);
        let second = parse(first.href());
        assert_eq!(second, first, "reparse of {}", input);
    }
}

#[test]
fn test_whitespace_is_cleaned() {
    let url = parse("  http://exa\tmple.com/pa\nth  ");
    assert_eq!(url.hostname(), Some("example.com"));
    assert_eq!(url.pathname(), Some("/path"));
}

#[test]
fn test_display_is_href() {
    let url = parse("HTTPS://Example.com/x");
    assert_eq!(url.to_string(), "https://example.com/x");
}

#[test]
fn test_query_pairs() {
    let url = parse("http://example.com/search?q=rust+url&lang=en&empty");
    assert_eq!(
        url.query_pairs(),
        vec![
            ("q".to_string(), "rust url".to_string()),
            ("lang".to_string(), "en".to_string()),
            ("empty".to_string(), "".to_string()),
        ]
    );
    assert!(parse("http://example.com/").query_pairs().is_empty());
}

#[test]
fn test_parse_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let url = parse(&format!("http://host{}.example:{}/p", i, 8000 + i));
                (url.hostname().map(str::to_string), url.port().map(str::to_string))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (hostname, port) = handle.join().unwrap();
        assert_eq!(hostname, Some(format!("host{}.example", i)));
        assert_eq!(port, Some((8000 + i).to_string()));
    }
}

#[test]
fn test_trailing_colons_leave_no_residue() {
    let url = parse("http://host::/");
    assert_eq!(url.hostname(), Some("host"));
    assert_eq!(url.port(), None);
    assert_eq!(url.href(), "http://host/");

    let default_port = parse("http://h::80/");
    assert_eq!(default_port.host(), Some("h"));
    assert_eq!(default_port.href(), "http://h/");

    let unspecified = parse("http://::/");
    assert_eq!(unspecified.hostname(), Some("[::]"));
}

#[test]
fn test_hostname_lowercased_for_any_scheme() {
    let url = parse("foo://Bar.Example/baz");
    assert_eq!(url.hostname(), Some("bar.example"));
    assert_eq!(url.pathname(), Some("/baz"));

    let ipv6 = parse("foo://[FE80::1]/");
    assert_eq!(ipv6.hostname(), Some("[FE80::1]"));
}
