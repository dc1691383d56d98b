// scanlint-core/src/domain/metric.rs
//
// The closed metric vocabulary understood by the scan execution engine,
// plus the category tables the resolver expands from.

pub const ROW_COUNT: &str = "row_count";
pub const SCHEMA: &str = "schema";

pub const MISSING_COUNT: &str = "missing_count";
pub const MISSING_PERCENTAGE: &str = "missing_percentage";
pub const VALUES_COUNT: &str = "values_count";
pub const VALUES_PERCENTAGE: &str = "values_percentage";

pub const VALID_COUNT: &str = "valid_count";
pub const VALID_PERCENTAGE: &str = "valid_percentage";
pub const INVALID_COUNT: &str = "invalid_count";
pub const INVALID_PERCENTAGE: &str = "invalid_percentage";

pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const AVG: &str = "avg";
pub const SUM: &str = "sum";
pub const VARIANCE: &str = "variance";
pub const STDDEV: &str = "stddev";

pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const AVG_LENGTH: &str = "avg_length";

pub const DISTINCT: &str = "distinct";
pub const UNIQUE_COUNT: &str = "unique_count";
pub const UNIQUENESS: &str = "uniqueness";
pub const DUPLICATE_COUNT: &str = "duplicate_count";

pub const MINS: &str = "mins";
pub const MAXS: &str = "maxs";
pub const FREQUENT_VALUES: &str = "frequent_values";
pub const HISTOGRAM: &str = "histogram";

/// Every concrete metric name the execution engine understands.
/// Category tokens are not listed: a resolved metric list never contains one.
pub static METRIC_TYPES: &[&str] = &[
    ROW_COUNT,
    SCHEMA,
    MISSING_COUNT,
    MISSING_PERCENTAGE,
    VALUES_COUNT,
    VALUES_PERCENTAGE,
    VALID_COUNT,
    VALID_PERCENTAGE,
    INVALID_COUNT,
    INVALID_PERCENTAGE,
    MIN,
    MAX,
    AVG,
    SUM,
    VARIANCE,
    STDDEV,
    MIN_LENGTH,
    MAX_LENGTH,
    AVG_LENGTH,
    DISTINCT,
    UNIQUE_COUNT,
    UNIQUENESS,
    DUPLICATE_COUNT,
    MINS,
    MAXS,
    FREQUENT_VALUES,
    HISTOGRAM,
];

// --- CATEGORY TABLES ---
// A category is shorthand for a bundle of concrete metrics. The set is
// closed: three categories plus the histogram dependency rule below.

pub const CATEGORY_MISSING: &str = "missing";
pub static CATEGORY_MISSING_METRICS: &[&str] = &[
    MISSING_COUNT,
    MISSING_PERCENTAGE,
    VALUES_COUNT,
    VALUES_PERCENTAGE,
];

pub const CATEGORY_VALIDITY: &str = "validity";
pub static CATEGORY_VALIDITY_METRICS: &[&str] = &[
    VALID_COUNT,
    VALID_PERCENTAGE,
    INVALID_COUNT,
    INVALID_PERCENTAGE,
];

// The category token doubles as the name of its first constituent, so
// resolving ["distinct"] removes the token and re-adds it as a metric.
pub const CATEGORY_DISTINCT: &str = "distinct";
pub static CATEGORY_DISTINCT_METRICS: &[&str] =
    &[DISTINCT, UNIQUE_COUNT, UNIQUENESS, DUPLICATE_COUNT];

pub fn is_metric_type(name: &str) -> bool {
    METRIC_TYPES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_constituents_are_metric_types() {
        for metric in CATEGORY_MISSING_METRICS
            .iter()
            .chain(CATEGORY_VALIDITY_METRICS)
            .chain(CATEGORY_DISTINCT_METRICS)
        {
            assert!(is_metric_type(metric), "{metric} missing from METRIC_TYPES");
        }
    }

    #[test]
    fn test_category_tokens_do_not_leak_into_vocabulary() {
        assert!(!is_metric_type(CATEGORY_MISSING));
        assert!(!is_metric_type(CATEGORY_VALIDITY));
        // "distinct" is both the category token and a concrete metric.
        assert!(is_metric_type(CATEGORY_DISTINCT));
    }
}
