//! Result types for scan output.
//!
//! A scan yields a [`ScanResult`]: whether the page declared keywords (and if
//! so, how often each one occurs in visible text) plus the HTTP status code.
//! [`Report`] is the flat JSON envelope handed to front ends.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Keyword to occurrence count. Only keywords seen at least once are present.
pub type FrequencyTable = BTreeMap<String, usize>;

/// `errorMessage` part used when the page declares no keywords.
pub const NO_KEYWORDS_MESSAGE: &str = "no keywords found";

/// `errorMessage` part used when the page answered with HTTP 404.
pub const NOT_FOUND_MESSAGE: &str = "page returned HTTP 404";

/// Outcome of counting keywords on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordFrequency {
    /// No `<meta name="keywords">` with usable content was found.
    NotDeclared,

    /// Keywords were declared; `frequency` may still be empty.
    Declared {
        /// Normalized keywords from the last meta keywords tag seen,
        /// in declaration order, duplicates included.
        keywords: Vec<String>,
        /// Occurrences of declared keywords in visible text.
        frequency: FrequencyTable,
    },
}

impl KeywordFrequency {
    /// The frequency table, or `None` if the page declared no keywords.
    #[must_use]
    pub fn frequency(&self) -> Option<&FrequencyTable> {
        match self {
            Self::NotDeclared => None,
            Self::Declared { frequency, .. } => Some(frequency),
        }
    }

    /// The declared keyword list, or `None` if the page declared no keywords.
    #[must_use]
    pub fn keywords(&self) -> Option<&[String]> {
        match self {
            Self::NotDeclared => None,
            Self::Declared { keywords, .. } => Some(keywords),
        }
    }

    /// Whether a meta keywords declaration was found.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        matches!(self, Self::Declared { .. })
    }
}

/// Result of scanning one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Keyword declaration and counts.
    pub outcome: KeywordFrequency,

    /// HTTP status code of the page response.
    pub status_code: u16,
}

impl ScanResult {
    /// The frequency table, or `None` if the page declared no keywords.
    #[must_use]
    pub fn frequency(&self) -> Option<&FrequencyTable> {
        self.outcome.frequency()
    }

    /// Split into the frequency table (if keywords were declared) and status code.
    #[must_use]
    pub fn into_parts(self) -> (Option<FrequencyTable>, u16) {
        let frequency = match self.outcome {
            KeywordFrequency::NotDeclared => None,
            KeywordFrequency::Declared { frequency, .. } => Some(frequency),
        };
        (frequency, self.status_code)
    }
}

/// One `keyword : count` line per entry, or `{}` when there is nothing to list.
impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frequency() {
            Some(frequency) if !frequency.is_empty() => {
                let lines: Vec<String> = frequency
                    .iter()
                    .map(|(keyword, count)| format!("{keyword} : {count}"))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            _ => f.write_str("{}"),
        }
    }
}

/// JSON envelope describing a scan for front ends.
///
/// Field names serialize in camelCase: `keywords`, `frequency`,
/// `statusCode`, `errorMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Distinct declared keywords in declaration order.
    pub keywords: Option<Vec<String>>,

    /// Keyword counts; `None` when no keywords were declared.
    pub frequency: Option<FrequencyTable>,

    /// HTTP status code; `None` when no request completed.
    pub status_code: Option<u16>,

    /// Human-readable notes, empty when there is nothing to report.
    pub error_message: String,
}

impl Report {
    /// Build the envelope for a completed scan.
    #[must_use]
    pub fn from_scan(result: &ScanResult) -> Self {
        let mut notes: Vec<&str> = Vec::new();
        if !result.outcome.is_declared() {
            notes.push(NO_KEYWORDS_MESSAGE);
        }
        if result.status_code == 404 {
            notes.push(NOT_FOUND_MESSAGE);
        }

        let keywords = result.outcome.keywords().map(|declared| {
            let mut distinct: Vec<String> = Vec::with_capacity(declared.len());
            for keyword in declared {
                if !distinct.contains(keyword) {
                    distinct.push(keyword.clone());
                }
            }
            distinct
        });

        Self {
            keywords,
            frequency: result.frequency().cloned(),
            status_code: Some(result.status_code),
            error_message: notes.join("; "),
        }
    }

    /// Build the envelope for a scan that failed before producing a result.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        Self {
            error_message: format!("error: {error}"),
            ..Self::default()
        }
    }
}

impl From<&ScanResult> for Report {
    fn from(result: &ScanResult) -> Self {
        Self::from_scan(result)
    }
}
