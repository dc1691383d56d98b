// scanlint-core/src/domain/diagnostics.rs
//
// The parse log: every anomaly found while building a scan configuration is
// captured here as data instead of aborting the parse. One instance per
// parse, threaded by `&mut` into every sub-parse, read-only afterwards.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseEntry {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for ParseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseLog {
    entries: Vec<ParseEntry>,
}

impl ParseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(ParseEntry {
            severity,
            message: message.into(),
        });
    }

    /// One warning enumerating every element of `values` not present in
    /// `valid_values`. Logs nothing when all elements are valid.
    pub fn warning_invalid_elements<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a str>,
        valid_values: &[&str],
        message: &str,
    ) {
        let invalid: Vec<&str> = values
            .into_iter()
            .filter(|value| !valid_values.contains(value))
            .collect();
        if !invalid.is_empty() {
            self.warning(format!("{message}: [{}]", invalid.join(", ")));
        }
    }

    pub fn entries(&self) -> &[ParseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings_or_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity != Severity::Info)
    }
}
