// scanlint-core/src/domain/resolver.rs
//
// The metric resolution engine. Expands category tokens ("missing",
// "validity", "distinct") into their concrete constituent metrics, applies
// the histogram -> {min, max} dependency rule, and records an info entry for
// every metric added implicitly. Mutates the list in place; never fails.
// Unknown metric strings pass through untouched; the builder's allow-list
// check reports those.

use crate::domain::diagnostics::ParseLog;
use crate::domain::metric;

/// Adds `metric` to the list if absent, logging its provenance.
/// A metric that is already present is a no-op, so repeated resolution
/// produces neither duplicate entries nor duplicate log lines.
pub fn ensure_metric(
    metrics: &mut Vec<String>,
    metric: &str,
    dependent_metric: &str,
    log: &mut ParseLog,
    column_name: Option<&str>,
) {
    if !metrics.iter().any(|m| m == metric) {
        metrics.push(metric.to_string());
        let column_message = match column_name {
            Some(name) => format!(" on column {name}"),
            None => String::new(),
        };
        log.info(format!(
            "Added metric {metric} as dependency of {dependent_metric}{column_message}"
        ));
    }
}

/// A category is active when its token is present, or when any one of its
/// constituents was requested explicitly: asking for one sibling pulls in
/// the whole bundle.
pub fn is_metric_category_enabled(
    metrics: &[String],
    category: &str,
    category_metrics: &[&str],
) -> bool {
    if metrics.iter().any(|m| m == category) {
        return true;
    }
    category_metrics
        .iter()
        .any(|category_metric| metrics.iter().any(|m| m == category_metric))
}

/// Removes the category token and ensures every constituent, attributing
/// each insertion to the category name. Entirely a no-op for an inactive
/// category.
pub fn resolve_category(
    metrics: &mut Vec<String>,
    category: &str,
    category_metrics: &[&str],
    log: &mut ParseLog,
    column_name: Option<&str>,
) {
    if is_metric_category_enabled(metrics, category, category_metrics) {
        metrics.retain(|m| m != category);
        for category_metric in category_metrics {
            ensure_metric(metrics, category_metric, category, log, column_name);
        }
    }
}

/// Top-level entry point: the three fixed categories in order, then the
/// histogram dependency rule. The order only affects which log lines come
/// first; the categories do not overlap.
pub fn resolve_metrics(metrics: &mut Vec<String>, log: &mut ParseLog, column_name: Option<&str>) {
    resolve_category(
        metrics,
        metric::CATEGORY_MISSING,
        metric::CATEGORY_MISSING_METRICS,
        log,
        column_name,
    );
    resolve_category(
        metrics,
        metric::CATEGORY_VALIDITY,
        metric::CATEGORY_VALIDITY_METRICS,
        log,
        column_name,
    );
    resolve_category(
        metrics,
        metric::CATEGORY_DISTINCT,
        metric::CATEGORY_DISTINCT_METRICS,
        log,
        column_name,
    );

    if metrics.iter().any(|m| m == metric::HISTOGRAM) {
        ensure_metric(metrics, metric::MIN, metric::HISTOGRAM, log, column_name);
        ensure_metric(metrics, metric::MAX, metric::HISTOGRAM, log, column_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::Severity;

    fn list(metrics: &[&str]) -> Vec<String> {
        metrics.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_category_token_expands_to_all_constituents() {
        let mut metrics = list(&["missing"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(
            metrics,
            list(&[
                "missing_count",
                "missing_percentage",
                "values_count",
                "values_percentage",
            ])
        );
        // One info entry per added constituent, citing the category.
        assert_eq!(log.len(), 4);
        for entry in log.entries() {
            assert_eq!(entry.severity, Severity::Info);
            assert!(entry.message.contains("as dependency of missing"));
        }
    }

    #[test]
    fn test_single_constituent_pulls_in_siblings() {
        let mut metrics = list(&["valid_count"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(
            metrics,
            list(&[
                "valid_count",
                "valid_percentage",
                "invalid_count",
                "invalid_percentage",
            ])
        );
        // The trigger was already present: only the three siblings logged.
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_inactive_categories_untouched() {
        let mut metrics = list(&["row_count", "avg"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(metrics, list(&["row_count", "avg"]));
        assert!(log.is_empty());
    }

    #[test]
    fn test_histogram_implies_min_and_max() {
        let mut metrics = list(&["histogram"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(metrics, list(&["histogram", "min", "max"]));
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.entries()[0].message,
            "Added metric min as dependency of histogram"
        );
        assert_eq!(
            log.entries()[1].message,
            "Added metric max as dependency of histogram"
        );
    }

    #[test]
    fn test_histogram_with_min_already_present() {
        let mut metrics = list(&["min", "histogram"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(metrics, list(&["min", "histogram", "max"]));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_distinct_token_is_reinserted_as_metric() {
        let mut metrics = list(&["distinct"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(
            metrics,
            list(&["distinct", "unique_count", "uniqueness", "duplicate_count"])
        );
        // The token is removed and re-added as its own first constituent.
        assert_eq!(
            log.entries()[0].message,
            "Added metric distinct as dependency of distinct"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut metrics = list(&["missing", "validity", "distinct", "histogram"]);
        let mut log = ParseLog::new();
        resolve_metrics(&mut metrics, &mut log, None);

        let resolved = metrics.clone();
        let entries_after_first_pass = log.len();

        resolve_metrics(&mut metrics, &mut log, None);

        assert_eq!(metrics, resolved);
        assert_eq!(log.len(), entries_after_first_pass);
    }

    #[test]
    fn test_no_duplicates_after_resolution() {
        let mut metrics = list(&["missing", "missing_count", "histogram", "min"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        let mut deduped = metrics.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), metrics.len());
    }

    #[test]
    fn test_final_set_is_order_independent() {
        let mut forward = list(&["histogram", "missing"]);
        let mut backward = list(&["missing", "histogram"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut forward, &mut log, None);
        resolve_metrics(&mut backward, &mut log, None);

        let mut forward_sorted = forward.clone();
        let mut backward_sorted = backward.clone();
        forward_sorted.sort();
        backward_sorted.sort();
        assert_eq!(forward_sorted, backward_sorted);
    }

    #[test]
    fn test_column_attribution_in_messages() {
        let mut metrics = list(&["histogram"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, Some("revenue"));

        assert_eq!(
            log.entries()[0].message,
            "Added metric min as dependency of histogram on column revenue"
        );
    }

    #[test]
    fn test_ensure_metric_twice_inserts_once() {
        let mut metrics = Vec::new();
        let mut log = ParseLog::new();

        ensure_metric(&mut metrics, "min", "histogram", &mut log, None);
        ensure_metric(&mut metrics, "min", "histogram", &mut log, None);

        assert_eq!(metrics, list(&["min"]));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_unknown_strings_pass_through() {
        let mut metrics = list(&["no_such_metric", "missing"]);
        let mut log = ParseLog::new();

        resolve_metrics(&mut metrics, &mut log, None);

        assert!(metrics.iter().any(|m| m == "no_such_metric"));
    }

    #[test]
    fn test_is_metric_category_enabled_predicate() {
        let by_token = list(&["missing"]);
        let by_constituent = list(&["values_count"]);
        let neither = list(&["row_count"]);

        let constituents = crate::domain::metric::CATEGORY_MISSING_METRICS;
        assert!(is_metric_category_enabled(&by_token, "missing", constituents));
        assert!(is_metric_category_enabled(
            &by_constituent,
            "missing",
            constituents
        ));
        assert!(!is_metric_category_enabled(&neither, "missing", constituents));
    }
}
