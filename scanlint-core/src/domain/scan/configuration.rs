// scanlint-core/src/domain/scan/configuration.rs
//
// The scan configuration builder. One pass over the raw YAML mapping:
// every anomaly degrades to a parse-log entry, construction always
// completes, and the result is immutable and queryable by column name.

use std::collections::HashMap;

use crate::domain::diagnostics::ParseLog;
use crate::domain::error::DomainError;
use crate::domain::metric;
use crate::domain::resolver::resolve_metrics;
use crate::domain::scan::column::{ColumnConfiguration, MissingRules, ValidityRules};
use crate::domain::scan::helper::{parse_int, scalar_string};
use serde_yaml::{Mapping, Value};

pub const KEY_TABLE_NAME: &str = "table_name";
pub const KEY_METRICS: &str = "metrics";
pub const KEY_COLUMNS: &str = "columns";
pub const KEY_MINS_MAXS_LIMIT: &str = "mins_maxs_limit";
pub const KEY_FREQUENT_VALUES_LIMIT: &str = "frequent_values_limit";
pub const KEY_SAMPLE_PERCENTAGE: &str = "sample_percentage";
pub const KEY_SAMPLE_METHOD: &str = "sample_method";

static VALID_KEYS: &[&str] = &[
    KEY_TABLE_NAME,
    KEY_METRICS,
    KEY_COLUMNS,
    KEY_MINS_MAXS_LIMIT,
    KEY_FREQUENT_VALUES_LIMIT,
    KEY_SAMPLE_PERCENTAGE,
    KEY_SAMPLE_METHOD,
];

const DEFAULT_LIMIT: i64 = 20;
const PARSE_CONTEXT: &str = "scan configuration";

#[derive(Debug, Clone)]
pub struct ScanConfiguration {
    table_name: Option<String>,
    metrics: Vec<String>,
    /// Keyed by lower-cased column name; last write wins when two
    /// differently-cased keys collide.
    columns: HashMap<String, ColumnConfiguration>,
    sample_percentage: Option<Value>,
    sample_method: String,
    mins_maxs_limit: i64,
    frequent_values_limit: i64,
    parse_log: ParseLog,
}

impl ScanConfiguration {
    /// Builds a configuration from the raw document. Never fails: broken
    /// fields fall back to safe defaults and are reported in the parse log.
    pub fn parse(doc: &Mapping) -> Self {
        let mut log = ParseLog::new();

        // 1. Table name
        let table_name = doc
            .get(KEY_TABLE_NAME)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        if table_name.is_none() {
            log.error("table_name is required");
        }

        // 2. Global metrics: shape check, category resolution, vocabulary check
        let mut metrics = match doc.get(KEY_METRICS) {
            None => Vec::new(),
            Some(Value::Sequence(sequence)) => sequence.iter().map(scalar_string).collect(),
            Some(_) => {
                log.error("metrics is not a list");
                Vec::new()
            }
        };
        resolve_metrics(&mut metrics, &mut log, None);
        log.warning_invalid_elements(
            metrics.iter().map(String::as_str),
            metric::METRIC_TYPES,
            "Invalid metrics value",
        );

        // 3. Column overrides, keys normalized to lower case
        let mut columns = HashMap::new();
        match doc.get(KEY_COLUMNS) {
            None => {}
            Some(Value::Mapping(columns_doc)) => {
                for (key, column_doc) in columns_doc {
                    match key.as_str() {
                        Some(column_name) => {
                            let column =
                                ColumnConfiguration::parse(column_name, column_doc, &mut log);
                            columns.insert(column_name.to_lowercase(), column);
                        }
                        None => log.error(format!(
                            "column name is not a string: {}",
                            scalar_string(key)
                        )),
                    }
                }
            }
            Some(_) => log.error("columns is not a mapping"),
        }

        // 4. Sampling: percentage is an untyped passthrough
        let sample_percentage = doc.get(KEY_SAMPLE_PERCENTAGE).cloned();
        let sample_method = match doc.get(KEY_SAMPLE_METHOD) {
            None => "SYSTEM".to_string(),
            Some(value) => scalar_string(value).to_uppercase(),
        };

        // 5. Limits
        let mins_maxs_limit = parse_int(
            doc,
            KEY_MINS_MAXS_LIMIT,
            &mut log,
            PARSE_CONTEXT,
            DEFAULT_LIMIT,
        );
        let frequent_values_limit = parse_int(
            doc,
            KEY_FREQUENT_VALUES_LIMIT,
            &mut log,
            PARSE_CONTEXT,
            DEFAULT_LIMIT,
        );

        // 6. Top-level key allow-list
        let keys: Vec<String> = doc.keys().map(scalar_string).collect();
        log.warning_invalid_elements(
            keys.iter().map(String::as_str),
            VALID_KEYS,
            "Invalid scan configuration",
        );

        Self {
            table_name,
            metrics,
            columns,
            sample_percentage,
            sample_method,
            mins_maxs_limit,
            frequent_values_limit,
            parse_log: log,
        }
    }

    // --- QUERY SURFACE ---

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// The resolved global metric list: no category tokens, no duplicates.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn sample_percentage(&self) -> Option<&Value> {
        self.sample_percentage.as_ref()
    }

    pub fn sample_method(&self) -> &str {
        &self.sample_method
    }

    pub fn parse_log(&self) -> &ParseLog {
        &self.parse_log
    }

    pub fn column_configuration(&self, column_name: &str) -> Option<&ColumnConfiguration> {
        self.columns.get(&column_name.to_lowercase())
    }

    /// True when the union of the global metrics and the column's own
    /// metrics intersects `candidates`.
    pub fn is_any_metric_enabled(&self, column_name: &str, candidates: &[&str]) -> bool {
        self.all_metrics(column_name)
            .any(|metric| candidates.contains(&metric))
    }

    pub fn is_metric_enabled(&self, column_name: &str, metric: &str) -> bool {
        self.all_metrics(column_name).any(|m| m == metric)
    }

    fn all_metrics<'a>(&'a self, column_name: &str) -> impl Iterator<Item = &'a str> {
        let column_metrics = self
            .column_configuration(column_name)
            .and_then(|column| column.metrics.as_deref())
            .unwrap_or(&[]);
        self.metrics
            .iter()
            .chain(column_metrics)
            .map(String::as_str)
    }

    pub fn missing(&self, column_name: &str) -> Option<&MissingRules> {
        self.column_configuration(column_name)?.missing.as_ref()
    }

    pub fn validity(&self, column_name: &str) -> Option<&ValidityRules> {
        self.column_configuration(column_name)?.validity.as_ref()
    }

    pub fn validity_format(&self, column_name: &str) -> Option<&str> {
        self.validity(column_name)?.format.as_deref()
    }

    /// The column parameter is a hook for per-column overrides; today every
    /// column shares the one global limit.
    pub fn mins_maxs_limit(&self, _column_name: &str) -> i64 {
        self.mins_maxs_limit
    }

    // TODO: confirm whether this should read frequent_values_limit instead
    // of the mins/maxs cap before downstream executors start relying on it.
    pub fn frequent_values_limit(&self, _column_name: &str) -> i64 {
        self.mins_maxs_limit
    }

    /// The parsed `frequent_values_limit` field itself.
    pub fn frequent_values_limit_value(&self) -> i64 {
        self.frequent_values_limit
    }

    pub fn has_errors(&self) -> bool {
        self.parse_log.has_errors()
    }

    /// Strictness gate: a configuration that parsed with error-severity
    /// diagnostics must not drive a scan.
    pub fn assert_no_errors(&self) -> Result<(), DomainError> {
        let count = self.parse_log.error_count();
        if count == 0 {
            Ok(())
        } else {
            Err(DomainError::ConfigurationErrors {
                table: self.table_name.clone().unwrap_or_default(),
                count,
            })
        }
    }
}
