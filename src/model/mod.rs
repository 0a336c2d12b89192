//! Domain records: issues, insight collections, and metric scores.

pub mod insights;
pub mod issue;
pub mod metrics;

pub use insights::{Cycle, InsightItem, Insights, TopPick};
pub use issue::{
    Dependency, DependencyKind, InvalidIssue, Issue, IssueStatus, IssueStore, IssueType,
};
pub use metrics::{
    FamilySwitch, GraphStats, Metric, MetricConfig, MetricFamily, MetricRunStatus, RunState,
};
