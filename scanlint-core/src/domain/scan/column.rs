// scanlint-core/src/domain/scan/column.rs
//
// Per-column overrides of a scan configuration: an optional metric list
// (resolved with column attribution through the same resolver as the global
// list) and optional missing / validity rule blocks.

use crate::domain::diagnostics::ParseLog;
use crate::domain::metric;
use crate::domain::resolver::resolve_metrics;
use crate::domain::scan::helper::scalar_string;
use regex::Regex;
use serde_yaml::{Mapping, Value};

const KEY_METRICS: &str = "metrics";
const KEY_MISSING: &str = "missing";
const KEY_VALIDITY: &str = "validity";

static COLUMN_KEYS: &[&str] = &[KEY_METRICS, KEY_MISSING, KEY_VALIDITY];
static MISSING_KEYS: &[&str] = &["values", "format", "regex"];
static VALIDITY_KEYS: &[&str] = &[
    "format",
    "regex",
    "values",
    "min_length",
    "max_length",
    "min",
    "max",
];

/// Which values count as missing for a column, beyond NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingRules {
    pub values: Option<Vec<String>>,
    pub format: Option<String>,
    pub regex: Option<String>,
}

/// Which non-missing values count as valid for a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidityRules {
    pub format: Option<String>,
    pub regex: Option<String>,
    pub values: Option<Vec<String>>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct ColumnConfiguration {
    /// Original casing, for diagnostics. Lookups go through the lower-cased
    /// map key owned by the scan configuration.
    pub column_name: String,
    /// Column-specific additions to the global metric list. Absent key means
    /// no additions, not an empty override.
    pub metrics: Option<Vec<String>>,
    pub missing: Option<MissingRules>,
    pub validity: Option<ValidityRules>,
}

impl ColumnConfiguration {
    pub fn parse(column_name: &str, doc: &Value, log: &mut ParseLog) -> Self {
        let Some(mapping) = doc.as_mapping() else {
            log.error(format!(
                "column configuration is not a mapping on column {column_name}"
            ));
            return Self {
                column_name: column_name.to_string(),
                ..Self::default()
            };
        };

        let metrics = parse_column_metrics(column_name, mapping, log);

        let missing = mapping
            .get(KEY_MISSING)
            .map(|value| MissingRules::parse(column_name, value, log));
        let validity = mapping
            .get(KEY_VALIDITY)
            .map(|value| ValidityRules::parse(column_name, value, log));

        let keys: Vec<String> = mapping.keys().map(scalar_string).collect();
        log.warning_invalid_elements(
            keys.iter().map(String::as_str),
            COLUMN_KEYS,
            &format!("Invalid column configuration on column {column_name}"),
        );

        Self {
            column_name: column_name.to_string(),
            metrics,
            missing,
            validity,
        }
    }
}

fn parse_column_metrics(
    column_name: &str,
    mapping: &Mapping,
    log: &mut ParseLog,
) -> Option<Vec<String>> {
    match mapping.get(KEY_METRICS) {
        None => None,
        Some(Value::Sequence(sequence)) => {
            let mut metrics: Vec<String> = sequence.iter().map(scalar_string).collect();
            resolve_metrics(&mut metrics, log, Some(column_name));
            log.warning_invalid_elements(
                metrics.iter().map(String::as_str),
                metric::METRIC_TYPES,
                &format!("Invalid metrics value on column {column_name}"),
            );
            Some(metrics)
        }
        Some(_) => {
            log.error(format!("metrics is not a list on column {column_name}"));
            None
        }
    }
}

impl MissingRules {
    fn parse(column_name: &str, doc: &Value, log: &mut ParseLog) -> Self {
        let Some(mapping) = section_mapping(column_name, KEY_MISSING, doc, log) else {
            return Self::default();
        };
        let rules = Self {
            values: list_field(mapping, "values", KEY_MISSING, column_name, log),
            format: string_field(mapping, "format", KEY_MISSING, column_name, log),
            regex: string_field(mapping, "regex", KEY_MISSING, column_name, log),
        };
        check_regex(rules.regex.as_deref(), KEY_MISSING, column_name, log);
        warn_unknown_keys(mapping, MISSING_KEYS, KEY_MISSING, column_name, log);
        rules
    }
}

impl ValidityRules {
    fn parse(column_name: &str, doc: &Value, log: &mut ParseLog) -> Self {
        let Some(mapping) = section_mapping(column_name, KEY_VALIDITY, doc, log) else {
            return Self::default();
        };
        let rules = Self {
            format: string_field(mapping, "format", KEY_VALIDITY, column_name, log),
            regex: string_field(mapping, "regex", KEY_VALIDITY, column_name, log),
            values: list_field(mapping, "values", KEY_VALIDITY, column_name, log),
            min_length: int_field(mapping, "min_length", KEY_VALIDITY, column_name, log),
            max_length: int_field(mapping, "max_length", KEY_VALIDITY, column_name, log),
            min: float_field(mapping, "min", KEY_VALIDITY, column_name, log),
            max: float_field(mapping, "max", KEY_VALIDITY, column_name, log),
        };
        check_regex(rules.regex.as_deref(), KEY_VALIDITY, column_name, log);
        warn_unknown_keys(mapping, VALIDITY_KEYS, KEY_VALIDITY, column_name, log);
        rules
    }
}

// --- FIELD EXTRACTION ---

fn section_mapping<'a>(
    column_name: &str,
    section: &str,
    doc: &'a Value,
    log: &mut ParseLog,
) -> Option<&'a Mapping> {
    let mapping = doc.as_mapping();
    if mapping.is_none() {
        log.error(format!(
            "{section} is not a mapping on column {column_name}"
        ));
    }
    mapping
}

fn string_field(
    mapping: &Mapping,
    key: &str,
    section: &str,
    column_name: &str,
    log: &mut ParseLog,
) -> Option<String> {
    match mapping.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(_) => {
            log.warning(format!(
                "Invalid {key} in {section} on column {column_name}: expected a string"
            ));
            None
        }
    }
}

fn list_field(
    mapping: &Mapping,
    key: &str,
    section: &str,
    column_name: &str,
    log: &mut ParseLog,
) -> Option<Vec<String>> {
    match mapping.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Sequence(sequence)) => Some(sequence.iter().map(scalar_string).collect()),
        Some(_) => {
            log.warning(format!(
                "Invalid {key} in {section} on column {column_name}: expected a list"
            ));
            None
        }
    }
}

fn int_field(
    mapping: &Mapping,
    key: &str,
    section: &str,
    column_name: &str,
    log: &mut ParseLog,
) -> Option<i64> {
    match mapping.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) if number.is_i64() => number.as_i64(),
        Some(_) => {
            log.warning(format!(
                "Invalid {key} in {section} on column {column_name}: expected an integer"
            ));
            None
        }
    }
}

fn float_field(
    mapping: &Mapping,
    key: &str,
    section: &str,
    column_name: &str,
    log: &mut ParseLog,
) -> Option<f64> {
    match mapping.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => number.as_f64(),
        Some(_) => {
            log.warning(format!(
                "Invalid {key} in {section} on column {column_name}: expected a number"
            ));
            None
        }
    }
}

/// User-supplied patterns are compiled once at parse time so a broken regex
/// surfaces in the report instead of at scan execution.
fn check_regex(pattern: Option<&str>, section: &str, column_name: &str, log: &mut ParseLog) {
    if let Some(pattern) = pattern {
        if let Err(error) = Regex::new(pattern) {
            log.warning(format!(
                "Invalid regex in {section} on column {column_name}: {error}"
            ));
        }
    }
}

fn warn_unknown_keys(
    mapping: &Mapping,
    valid_keys: &[&str],
    section: &str,
    column_name: &str,
    log: &mut ParseLog,
) {
    let keys: Vec<String> = mapping.keys().map(scalar_string).collect();
    log.warning_invalid_elements(
        keys.iter().map(String::as_str),
        valid_keys,
        &format!("Invalid {section} configuration on column {column_name}"),
    );
}
