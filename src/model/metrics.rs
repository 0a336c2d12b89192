//! Precomputed graph metrics and their run status.
//!
//! `GraphStats` is the score lookup the dashboard consults. It only stores
//! what the analyzer produced; missing scores read as `0.0` and a missing
//! status table reads as "nothing was skipped".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::insights::sources::ScoreLookup;

/// A per-issue score the analyzer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[serde(alias = "pagerank")]
    PageRank,
    Betweenness,
    Eigenvector,
    Hub,
    Authority,
    /// Impact depth along the longest dependency chain.
    #[serde(alias = "critical")]
    CriticalPath,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::PageRank,
        Metric::Betweenness,
        Metric::Eigenvector,
        Metric::CriticalPath,
        Metric::Hub,
        Metric::Authority,
    ];

    /// The computation that produces this score.
    pub fn family(self) -> MetricFamily {
        match self {
            Metric::PageRank => MetricFamily::PageRank,
            Metric::Betweenness => MetricFamily::Betweenness,
            Metric::Eigenvector => MetricFamily::Eigenvector,
            Metric::Hub | Metric::Authority => MetricFamily::Hits,
            Metric::CriticalPath => MetricFamily::CriticalPath,
        }
    }

    /// Short label used in the metrics row of the detail panel.
    pub fn label(self) -> &'static str {
        match self {
            Metric::PageRank => "PageRank",
            Metric::Betweenness => "Betweenness",
            Metric::Eigenvector => "Eigenvector",
            Metric::Hub => "Hub",
            Metric::Authority => "Authority",
            Metric::CriticalPath => "Impact",
        }
    }
}

/// One named graph computation. Several metrics may share a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFamily {
    #[serde(alias = "pagerank")]
    PageRank,
    Betweenness,
    Eigenvector,
    Hits,
    #[serde(alias = "critical")]
    CriticalPath,
    Cycles,
}

/// Outcome of one metric family's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Computed,
    Skipped,
    #[serde(rename = "timeout", alias = "timed_out", alias = "timed-out")]
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetricRunStatus {
    #[serde(default)]
    pub state: RunState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MetricRunStatus {
    pub fn computed() -> Self {
        Self::default()
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            state: RunState::Skipped,
            reason: Some(reason.into()),
        }
    }

    pub fn timed_out(reason: impl Into<String>) -> Self {
        Self {
            state: RunState::TimedOut,
            reason: Some(reason.into()),
        }
    }

    /// True when the family produced no usable scores.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.state, RunState::Skipped | RunState::TimedOut)
    }
}

/// Static switch for one family, as configured for the analyzer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySwitch {
    #[serde(default = "default_compute")]
    pub compute: bool,
    #[serde(default)]
    pub skip_reason: String,
}

fn default_compute() -> bool {
    true
}

/// Analyzer configuration, used when no run status was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MetricConfig(pub HashMap<MetricFamily, FamilySwitch>);

impl MetricConfig {
    pub fn switch(&self, family: MetricFamily) -> Option<&FamilySwitch> {
        self.0.get(&family)
    }

    #[must_use]
    pub fn with_disabled(mut self, family: MetricFamily, reason: impl Into<String>) -> Self {
        self.0.insert(
            family,
            FamilySwitch {
                compute: false,
                skip_reason: reason.into(),
            },
        );
        self
    }
}

/// Scores, run status and degree counts for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphStats {
    pub scores: HashMap<Metric, HashMap<String, f64>>,
    pub status: HashMap<MetricFamily, MetricRunStatus>,
    pub config: Option<MetricConfig>,
    pub in_degree: HashMap<String, usize>,
    pub out_degree: HashMap<String, usize>,
}

impl GraphStats {
    /// Record a score, creating the metric's map on first use.
    pub fn set_score(&mut self, metric: Metric, id: impl Into<String>, value: f64) {
        self.scores.entry(metric).or_default().insert(id.into(), value);
    }

    pub fn set_status(&mut self, family: MetricFamily, status: MetricRunStatus) {
        self.status.insert(family, status);
    }
}

impl ScoreLookup for GraphStats {
    fn score(&self, metric: Metric, id: &str) -> f64 {
        self.scores
            .get(&metric)
            .and_then(|scores| scores.get(id))
            .copied()
            .unwrap_or(0.0)
    }

    fn run_status(&self, family: MetricFamily) -> Option<&MetricRunStatus> {
        self.status.get(&family)
    }

    fn metric_config(&self) -> Option<&MetricConfig> {
        self.config.as_ref()
    }

    fn neighbor_score_map(&self, metric: Metric) -> Option<&HashMap<String, f64>> {
        self.scores.get(&metric)
    }

    fn in_degree(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }

    fn out_degree(&self, id: &str) -> usize {
        self.out_degree.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_score_reads_zero() {
        let mut stats = GraphStats::default();
        stats.set_score(Metric::Betweenness, "A", 0.25);
        assert_eq!(stats.score(Metric::Betweenness, "A"), 0.25);
        assert_eq!(stats.score(Metric::Betweenness, "B"), 0.0);
        assert_eq!(stats.score(Metric::Hub, "A"), 0.0);
    }

    #[test]
    fn test_hub_and_authority_share_hits_family() {
        assert_eq!(Metric::Hub.family(), MetricFamily::Hits);
        assert_eq!(Metric::Authority.family(), MetricFamily::Hits);
        assert_eq!(Metric::CriticalPath.family(), MetricFamily::CriticalPath);
    }

    #[test]
    fn test_status_wire_format() {
        let json = r#"{
            "status": {
                "betweenness": {"state": "timeout", "reason": "exceeded 500ms"},
                "hits": {"state": "skipped"},
                "critical": {"state": "computed"}
            },
            "config": {"cycles": {"compute": false, "skip_reason": "graph too large"}}
        }"#;
        let stats: GraphStats = serde_json::from_str(json).unwrap();
        let bw = stats.run_status(MetricFamily::Betweenness).unwrap();
        assert_eq!(bw.state, RunState::TimedOut);
        assert!(bw.is_unavailable());
        assert_eq!(bw.reason.as_deref(), Some("exceeded 500ms"));
        assert!(stats.run_status(MetricFamily::Hits).unwrap().is_unavailable());
        assert!(!stats
            .run_status(MetricFamily::CriticalPath)
            .unwrap()
            .is_unavailable());
        let cycles = stats
            .metric_config()
            .and_then(|c| c.switch(MetricFamily::Cycles))
            .unwrap();
        assert!(!cycles.compute);
        assert_eq!(cycles.skip_reason, "graph too large");
    }

    #[test]
    fn test_degrees_default_to_zero() {
        let mut stats = GraphStats::default();
        stats.in_degree.insert("A".into(), 3);
        assert_eq!(stats.in_degree("A"), 3);
        assert_eq!(stats.out_degree("A"), 0);
    }
}
