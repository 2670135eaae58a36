//! Query-string helpers: decoding into pairs and encoding pairs for output.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, matching
/// `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decode a query (without `?`) into key/value pairs.
///
/// `+` decodes to a space and `%XX` escapes are resolved.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

/// Encode key/value pairs as `k=v&k=v`.
///
/// ```
/// use legacy_url::url::query::serialize_pairs;
///
/// let pairs = vec![("q".to_string(), "a b&c".to_string())];
/// assert_eq!(serialize_pairs(&pairs), "q=a%20b%26c");
/// ```
pub fn serialize_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, COMPONENT),
                utf8_percent_encode(value, COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
