//! Serialization of URL components back into a string.

use std::borrow::Cow;
use std::net::Ipv6Addr;

use crate::scheme::{scheme_info, SchemeInfo};
use crate::types::{Query, UrlComponents};
use crate::url::query::serialize_pairs;

/// Serialize URL components.
///
/// Absent fields are left out, missing `:`, `?` and `#` markers are added,
/// and the scheme's default port is dropped.
///
/// ```
/// use legacy_url::{format, UrlComponents};
///
/// let href = format(&UrlComponents {
///     protocol: Some("http:".into()),
///     hostname: Some("example.com".into()),
///     port: Some("80".into()),
///     pathname: Some("/".into()),
///     ..Default::default()
/// });
/// assert_eq!(href, "http://example.com/");
/// ```
pub fn format(components: &UrlComponents) -> String {
    let protocol = components.protocol.as_deref().map(|protocol| {
        if protocol.ends_with(':') {
            Cow::Borrowed(protocol)
        } else {
            Cow::Owned(format!("{}:", protocol))
        }
    });
    let scheme = protocol.as_deref().map(scheme_info);
    let special = scheme.map_or(false, |info| info.is_special());

    let host = host_text(components, scheme);
    let needs_slashes = host.is_some() && (components.slashes || scheme.is_none() || special);

    let mut out = String::new();
    if let Some(protocol) = &protocol {
        out.push_str(protocol);
    }

    if let Some(host) = &host {
        if needs_slashes {
            out.push_str("//");
        }
        if let Some(auth) = &components.auth {
            out.push_str(auth);
            out.push('@');
        }
        out.push_str(host);
    }

    if let Some(pathname) = components.pathname.as_deref().filter(|p| !p.is_empty()) {
        if needs_slashes && !pathname.starts_with('/') {
            out.push('/');
        }
        out.push_str(&pathname.replace('?', "%3F").replace('#', "%23"));
    }

    if let Some(search) = search_text(components) {
        if !search.starts_with('?') {
            out.push('?');
        }
        out.push_str(&search.replace('#', "%23"));
    }

    if let Some(hash) = &components.hash {
        if !hash.starts_with('#') {
            out.push('#');
        }
        out.push_str(hash);
    }

    out
}

/// Host text with the default port removed, or `None` without a host.
fn host_text(components: &UrlComponents, scheme: Option<SchemeInfo>) -> Option<String> {
    let is_default = |port: &str| scheme.map_or(false, |info| info.is_default_port(port));

    if let Some(hostname) = &components.hostname {
        let mut host = if hostname.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", hostname)
        } else {
            hostname.clone()
        };
        if let Some(port) = components.port.as_deref().filter(|port| !is_default(port)) {
            host.push(':');
            host.push_str(port);
        }
        return Some(host);
    }

    components.host.as_ref().map(|host| match host.rsplit_once(':') {
        Some((name, port))
            if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) && is_default(port) =>
        {
            name.to_string()
        }
        _ => host.clone(),
    })
}

fn search_text(components: &UrlComponents) -> Option<Cow<'_, str>> {
    if let Some(search) = &components.search {
        return Some(Cow::Borrowed(search.as_str()));
    }
    match &components.query {
        Some(Query::Raw(query)) => Some(Cow::Owned(format!("?{}", query))),
        Some(Query::Pairs(pairs)) if !pairs.is_empty() => {
            Some(Cow::Owned(format!("?{}", serialize_pairs(pairs))))
        }
        _ => None,
    }
}
