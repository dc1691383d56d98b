// scanlint-core/src/domain/scan/helper.rs
//
// Scalar extraction over the loosely-typed YAML document. Failures degrade
// to defaults and land in the parse log; nothing here ever aborts a parse.

use crate::domain::diagnostics::ParseLog;
use serde_yaml::{Mapping, Value};

/// Integer field with a default. Accepts integers and integer-shaped
/// strings; anything else logs an error and falls back to `default`.
pub fn parse_int(
    doc: &Mapping,
    key: &str,
    log: &mut ParseLog,
    context: &str,
    default: i64,
) -> i64 {
    match doc.get(key) {
        None => default,
        Some(Value::Number(number)) if number.is_i64() => number.as_i64().unwrap_or(default),
        Some(Value::String(text)) if text.trim().parse::<i64>().is_ok() => {
            text.trim().parse::<i64>().unwrap_or(default)
        }
        Some(other) => {
            log.error(format!(
                "Invalid {key} in {context}: {} is not an integer, using default {default}",
                scalar_string(other)
            ));
            default
        }
    }
}

/// Renders a YAML value for use in diagnostics and metric lists. Scalars
/// keep their natural text; structured values get a placeholder that will
/// never match a known vocabulary entry.
pub fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Null => "null".to_string(),
        Value::Sequence(_) => "<sequence>".to_string(),
        Value::Mapping(_) => "<mapping>".to_string(),
        Value::Tagged(_) => "<tagged>".to_string(),
    }
}
