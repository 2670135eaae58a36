//! Per-scheme facts consulted by both the parser and the serializer.

/// How a scheme treats the text after its colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// Always hierarchical: an authority is parsed even without `//`.
    Special,
    /// Never has an authority, not even after `//` (`javascript:`).
    Hostless,
    /// Known to carry an opaque path unless `//` follows (`mailto:`).
    Opaque,
    /// Not in the table; handled like [`SchemeKind::Opaque`].
    Unknown,
}

/// Static information about one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeInfo {
    pub kind: SchemeKind,
    pub default_port: Option<u16>,
}

impl SchemeInfo {
    const fn new(kind: SchemeKind, default_port: Option<u16>) -> Self {
        Self { kind, default_port }
    }

    pub fn is_special(&self) -> bool {
        self.kind == SchemeKind::Special
    }

    pub fn is_hostless(&self) -> bool {
        self.kind == SchemeKind::Hostless
    }

    /// Whether `port` (decimal digits) is this scheme's default port.
    pub fn is_default_port(&self, port: &str) -> bool {
        match (self.default_port, port.parse::<u16>()) {
            (Some(default), Ok(port)) => default == port,
            _ => false,
        }
    }
}

const UNKNOWN: SchemeInfo = SchemeInfo::new(SchemeKind::Unknown, None);

static SCHEMES: &[(&str, SchemeInfo)] = &[
    ("http", SchemeInfo::new(SchemeKind::Special, Some(80))),
    ("https", SchemeInfo::new(SchemeKind::Special, Some(443))),
    ("ws", SchemeInfo::new(SchemeKind::Special, Some(80))),
    ("wss", SchemeInfo::new(SchemeKind::Special, Some(443))),
    ("ftp", SchemeInfo::new(SchemeKind::Special, Some(21))),
    ("gopher", SchemeInfo::new(SchemeKind::Special, Some(70))),
    ("file", SchemeInfo::new(SchemeKind::Special, None)),
    ("javascript", SchemeInfo::new(SchemeKind::Hostless, None)),
    ("mailto", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("data", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("about", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("news", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("tel", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("urn", SchemeInfo::new(SchemeKind::Opaque, None)),
    ("blob", SchemeInfo::new(SchemeKind::Opaque, None)),
];

/// Look up a scheme, with or without its trailing `:`, in any case.
///
/// ```
/// use legacy_url::{scheme_info, SchemeKind};
///
/// assert_eq!(scheme_info("HTTPS:").default_port, Some(443));
/// assert_eq!(scheme_info("mailto").kind, SchemeKind::Opaque);
/// assert_eq!(scheme_info("made-up").kind, SchemeKind::Unknown);
/// ```
pub fn scheme_info(scheme: &str) -> SchemeInfo {
    let name = scheme.strip_suffix(':').unwrap_or(scheme);
    SCHEMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, info)| *info)
        .unwrap_or(UNKNOWN)
}

/// Whether `scheme` is `file`, which keeps an empty authority.
pub(crate) fn is_file(scheme: &str) -> bool {
    scheme.strip_suffix(':').unwrap_or(scheme).eq_ignore_ascii_case("file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_schemes_have_default_ports() {
        assert_eq!(scheme_info("http").default_port, Some(80));
        assert_eq!(scheme_info("ws").default_port, Some(80));
        assert_eq!(scheme_info("wss").default_port, Some(443));
        assert_eq!(scheme_info("ftp").default_port, Some(21));
        assert_eq!(scheme_info("gopher").default_port, Some(70));
        assert_eq!(scheme_info("file").default_port, None);
        assert!(scheme_info("file").is_special());
    }

    #[test]
    fn test_lookup_ignores_case_and_colon() {
        assert_eq!(scheme_info("HtTp:"), scheme_info("http"));
        assert!(scheme_info("JavaScript:").is_hostless());
    }

    #[test]
    fn test_default_port_match() {
        let http = scheme_info("http:");
        assert!(http.is_default_port("80"));
        assert!(!http.is_default_port("8080"));
        assert!(!http.is_default_port("99999"));
        assert!(!scheme_info("mailto").is_default_port("80"));
    }

    #[test]
    fn test_is_file() {
        assert!(is_file("FILE:"));
        assert!(!is_file("files"));
    }
}
