//! Conformance fixtures in the `urltestdata` line format.
//!
//! Each non-comment line holds a URL followed by space-separated
//! `key:value` annotations:
//!
//! | key | field |
//! |-----|-------|
//! | `s` | scheme (stored with a trailing `:`) |
//! | `u` | user |
//! | `pass` | password |
//! | `h` | hostname |
//! | `port` | port |
//! | `p` | pathname |
//! | `q` | query |
//! | `f` | fragment |
//!
//! Fields without an annotation are expected to be absent. `href`, `path`,
//! `search` and `slashes` are never compared.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::parser::parse;
use crate::error::UrlError;
use crate::types::ParsedUrl;

/// Expected field values built from a fixture line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpectedUrl {
    pub protocol: Option<String>,
    pub auth: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// One URL and what parsing it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCase {
    pub input: String,
    pub expected: ExpectedUrl,
}

/// A field whose parsed value differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.field,
            show(self.expected.as_deref()),
            show(self.actual.as_deref())
        )
    }
}

fn show(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "null".to_string(),
    }
}

/// Outcome of one fixture case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub mismatches: Vec<Mismatch>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Results of a whole fixture run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub results: Vec<CaseResult>,
}

impl Report {
    pub fn passes(&self) -> usize {
        self.results.iter().filter(|result| result.passed()).count()
    }

    pub fn failures(&self) -> usize {
        self.results.len() - self.passes()
    }
}

impl ExpectedUrl {
    /// Build expectations from `key:value` tokens.
    ///
    /// Tokens starting with `#`, tokens with nothing before the `:` and
    /// unknown keys are skipped.
    pub fn from_annotations<'a, I>(tokens: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut expected = ExpectedUrl::default();

        for token in tokens {
            if token.is_empty() || token.starts_with('#') {
                continue;
            }
            let (key, value) = match token.split_once(':') {
                Some((key, value)) if !key.is_empty() => (key, value),
                _ => continue,
            };

            match key {
                "s" => {
                    if !is_scheme(value) {
                        return Err(format!("invalid scheme annotation {:?}", value));
                    }
                    expected.protocol = Some(format!("{}:", value));
                }
                "u" => {
                    expected.auth = Some(format!("{}{}", value, expected.auth.as_deref().unwrap_or("")));
                }
                "pass" => {
                    expected.auth = Some(format!("{}:{}", expected.auth.as_deref().unwrap_or(""), value));
                }
                "h" => expected.hostname = Some(value.to_string()),
                "port" => {
                    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(format!("port annotation must be digits, got {:?}", value));
                    }
                    expected.port = Some(value.to_string());
                }
                "p" => expected.pathname = Some(value.to_string()),
                "q" => expected.query = Some(value.to_string()),
                "f" => expected.fragment = Some(value.to_string()),
                _ => continue,
            }
        }

        expected.host = expected.hostname.as_ref().map(|hostname| match &expected.port {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.clone(),
        });
        Ok(expected)
    }
}

fn is_scheme(value: &str) -> bool {
    let mut bytes = value.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

impl FixtureCase {
    /// Compare a parsed URL against the expectations, field by field.
    pub fn check(&self, actual: &ParsedUrl) -> Vec<Mismatch> {
        let expected = &self.expected;
        let fields: [(&'static str, Option<&str>, Option<&str>); 8] = [
            ("protocol", expected.protocol.as_deref(), actual.protocol()),
            ("auth", expected.auth.as_deref(), actual.auth()),
            ("host", expected.host.as_deref(), actual.host()),
            ("hostname", expected.hostname.as_deref(), actual.hostname()),
            ("port", expected.port.as_deref(), actual.port()),
            ("pathname", expected.pathname.as_deref(), actual.pathname()),
            ("query", expected.query.as_deref(), actual.query()),
            ("fragment", expected.fragment.as_deref(), actual.fragment()),
        ];

        fields
            .into_iter()
            .filter(|(_, expected, actual)| expected != actual)
            .map(|(field, expected, actual)| Mismatch {
                field,
                expected: expected.map(str::to_string),
                actual: actual.map(str::to_string),
            })
            .collect()
    }

    /// Parse the input and compare it.
    pub fn run(&self) -> CaseResult {
        let mismatches = self.check(&parse(&self.input));
        if !mismatches.is_empty() {
            debug!(input = %self.input, count = mismatches.len(), "fixture case failed");
        }
        CaseResult {
            input: self.input.clone(),
            mismatches,
        }
    }
}

/// Read one fixture line. Comments, blank lines and lines without
/// annotations yield `Ok(None)`.
pub fn parse_fixture_line(line: &str) -> Result<Option<FixtureCase>, String> {
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split(' ');
    let input = match tokens.next() {
        Some(input) => input,
        None => return Ok(None),
    };
    let annotations: Vec<&str> = tokens.collect();
    if annotations.is_empty() {
        return Ok(None);
    }

    let expected = ExpectedUrl::from_annotations(annotations)?;
    Ok(Some(FixtureCase {
        input: input.to_string(),
        expected,
    }))
}

/// Read a whole fixture file.
///
/// ```
/// use legacy_url::conformance::parse_fixture;
///
/// let cases = parse_fixture("# comment\nhttp://example.com/a s:http h:example.com p:/a\n").unwrap();
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0].expected.host.as_deref(), Some("example.com"));
/// ```
pub fn parse_fixture(text: &str) -> Result<Vec<FixtureCase>, UrlError> {
    let mut cases = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_fixture_line(line) {
            Ok(Some(case)) => cases.push(case),
            Ok(None) => {}
            Err(reason) => {
                return Err(UrlError::InvalidFixture {
                    line: index + 1,
                    reason,
                })
            }
        }
    }
    Ok(cases)
}

/// Run every case.
pub fn run_fixture(cases: &[FixtureCase]) -> Report {
    Report {
        results: cases.iter().map(FixtureCase::run).collect(),
    }
}
