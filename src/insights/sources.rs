//! Read-only query surfaces the dashboard consumes.
//!
//! Both collaborators are fully materialized before the dashboard runs;
//! nothing here blocks or mutates.

use std::collections::HashMap;

use crate::model::{Issue, Metric, MetricConfig, MetricFamily, MetricRunStatus};

/// Precomputed scores and run status, keyed by issue id.
pub trait ScoreLookup {
    /// Score for `id`, `0.0` when the analyzer produced none.
    fn score(&self, metric: Metric, id: &str) -> f64;

    /// Run status of a metric family, if one was recorded.
    fn run_status(&self, family: MetricFamily) -> Option<&MetricRunStatus>;

    /// Static analyzer configuration, if known.
    fn metric_config(&self) -> Option<&MetricConfig>;

    /// Whole score map of a metric, for batch neighbor ranking.
    fn neighbor_score_map(&self, metric: Metric) -> Option<&HashMap<String, f64>>;

    fn in_degree(&self, id: &str) -> usize;

    fn out_degree(&self, id: &str) -> usize;
}

/// Forward dependency edges plus issue metadata.
pub trait DependencyAccessor {
    /// Declared dependency targets of `id`, in stored order.
    fn dependencies_of(&self, id: &str) -> Vec<&str>;

    /// Every issue id. Order is unspecified.
    fn issue_ids(&self) -> Vec<&str>;

    fn issue(&self, id: &str) -> Option<&Issue>;
}

/// Issues whose dependency list targets `target`, sorted by id.
///
/// There is no reverse index: every issue's forward edges are scanned.
pub fn dependents<'a, D: DependencyAccessor + ?Sized>(deps: &'a D, target: &str) -> Vec<&'a str> {
    let mut found: Vec<&str> = deps
        .issue_ids()
        .into_iter()
        .filter(|id| deps.dependencies_of(id).iter().any(|dep| *dep == target))
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}

/// Declared dependency targets of `id`, in stored order.
pub fn dependencies<'a, D: DependencyAccessor + ?Sized>(deps: &'a D, id: &str) -> Vec<&'a str> {
    deps.dependencies_of(id)
}

/// Title for `id`, or `None` when the id is not in the issue set.
pub fn title_of<'a, D: DependencyAccessor + ?Sized>(deps: &'a D, id: &str) -> Option<&'a str> {
    deps.issue(id).map(|issue| issue.title.as_str())
}
