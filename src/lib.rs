// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod insights;
pub mod io;
pub mod model;
pub mod observability;
pub mod tui;

// Re-export commonly used types
pub use crate::errors::{DepmapError, ErrorCode};

pub use crate::insights::{
    DependencyAccessor, Explanation, InsightsDashboard, Panel, PanelState, PanelView, Proof,
    ScoreLookup, SkipState,
};

pub use crate::model::{
    Cycle, GraphStats, InsightItem, Insights, Issue, IssueStore, Metric, MetricFamily,
    MetricRunStatus, TopPick,
};

pub use crate::io::{load_inputs, load_snapshot, DashboardInputs, Snapshot};

pub use crate::config::{load_config, DepmapConfig};
