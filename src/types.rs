//! Core data structures: the parsed record and the serializer input.

use std::fmt;

use serde::Serialize;

use crate::core::formatter::format;
use crate::url::query::parse_pairs;

/// The structured result of [`parse`](crate::parse).
///
/// A `ParsedUrl` is built in one step with every field fixed, so `host`,
/// `path` and `href` always agree with the components they are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    protocol: Option<String>,
    slashes: bool,
    auth: Option<String>,
    host: Option<String>,
    port: Option<String>,
    hostname: Option<String>,
    hash: Option<String>,
    search: Option<String>,
    query: Option<String>,
    pathname: Option<String>,
    path: Option<String>,
    href: String,
}

/// Components of a URL as produced by the parser, before derived fields.
#[derive(Debug, Default)]
pub(crate) struct Parts {
    pub protocol: Option<String>,
    pub slashes: bool,
    pub auth: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
}

impl ParsedUrl {
    pub(crate) fn from_parts(parts: Parts) -> Self {
        let host = parts.hostname.as_ref().map(|hostname| match &parts.port {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.clone(),
        });
        let query = parts
            .search
            .as_deref()
            .map(|search| search.strip_prefix('?').unwrap_or(search).to_string());
        let path = match (&parts.pathname, &parts.search) {
            (None, None) => None,
            (pathname, search) => Some(format!(
                "{}{}",
                pathname.as_deref().unwrap_or(""),
                search.as_deref().unwrap_or("")
            )),
        };

        let href = format(&UrlComponents {
            protocol: parts.protocol.clone(),
            slashes: parts.slashes,
            auth: parts.auth.clone(),
            host: None,
            hostname: parts.hostname.clone(),
            port: parts.port.clone(),
            pathname: parts.pathname.clone(),
            search: parts.search.clone(),
            query: None,
            hash: parts.hash.clone(),
        });

        Self {
            protocol: parts.protocol,
            slashes: parts.slashes,
            auth: parts.auth,
            host,
            port: parts.port,
            hostname: parts.hostname,
            hash: parts.hash,
            search: parts.search,
            query,
            pathname: parts.pathname,
            path,
            href,
        }
    }

    /// Lower-cased scheme including the trailing `:`.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Whether an authority-introducing `//` applies to this URL.
    pub fn slashes(&self) -> bool {
        self.slashes
    }

    /// Userinfo (`user[:password]`) exactly as written.
    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    /// `hostname[:port]`.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Host without port. IPv6 literals keep their brackets.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Fragment including the leading `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Query including the leading `?`.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Query without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn pathname(&self) -> Option<&str> {
        self.pathname.as_deref()
    }

    /// `pathname + search`.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Canonical serialization of this record.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Fragment without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.hash.as_deref().map(|hash| hash.strip_prefix('#').unwrap_or(hash))
    }

    /// User part of `auth`, up to the first `:`.
    pub fn username(&self) -> Option<&str> {
        self.auth.as_deref().map(|auth| auth.split_once(':').map_or(auth, |(user, _)| user))
    }

    /// Password part of `auth`, after the first `:`.
    pub fn password(&self) -> Option<&str> {
        self.auth.as_deref().and_then(|auth| auth.split_once(':')).map(|(_, pass)| pass)
    }

    /// Form-decoded key/value pairs of the query, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query.as_deref().map(parse_pairs).unwrap_or_default()
    }

    /// Copy this record into serializer input.
    pub fn to_components(&self) -> UrlComponents {
        UrlComponents {
            protocol: self.protocol.clone(),
            slashes: self.slashes,
            auth: self.auth.clone(),
            host: self.host.clone(),
            hostname: self.hostname.clone(),
            port: self.port.clone(),
            pathname: self.pathname.clone(),
            search: self.search.clone(),
            query: self.query.clone().map(Query::Raw),
            hash: self.hash.clone(),
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// Query given to the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Already-encoded query text, without the `?`.
    Raw(String),
    /// Key/value pairs, encoded on output.
    Pairs(Vec<(String, String)>),
}

/// Input to [`format`](crate::format). Every field is optional.
///
/// ```
/// use legacy_url::{format, UrlComponents};
///
/// let href = format(&UrlComponents {
///     protocol: Some("https".into()),
///     hostname: Some("example.com".into()),
///     pathname: Some("/docs".into()),
///     ..Default::default()
/// });
/// assert_eq!(href, "https://example.com/docs");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub protocol: Option<String>,
    pub slashes: bool,
    pub auth: Option<String>,
    /// Used only when `hostname` is absent.
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    /// Used only when `search` is absent.
    pub query: Option<Query>,
    pub hash: Option<String>,
}
