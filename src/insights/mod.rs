//! Panel navigation and drill-down explanations over graph metrics.
//!
//! The core is pure: [`InsightsDashboard`] owns the panel collections and a
//! [`PanelState`], and reads scores and edges through the [`ScoreLookup`] and
//! [`DependencyAccessor`] traits. Rendering lives in `crate::tui` and
//! `crate::commands`.

pub mod dashboard;
pub mod explain;
pub mod format;
pub mod panel;
pub mod ranking;
pub mod scroll;
pub mod skip;
pub mod sources;
pub mod state;
pub mod text;

pub use dashboard::{empty_message, InsightsDashboard, PanelEntry, PanelRow, PanelStatus, PanelView};
pub use explain::{
    Capped, CycleStep, Explanation, ExplanationBuilder, Headline, IssueRef, MetricSummary, Proof,
    ScoredRef, CHAIN_DISPLAY_CAP, LIST_CAP,
};
pub use format::{cycle_chain, format_insight_value, format_metric_value, truncate_with_ellipsis};
pub use panel::{MetricInfo, Panel, PanelMap};
pub use ranking::{rank_by_score, total_score, ScoredId};
pub use scroll::{adjust_scroll_offset, calculate_visible_range, clamp_selection, scroll_indicator};
pub use skip::{resolve_skip_state, SkipState, DEFAULT_SKIP_REASON, FORCE_RECOMPUTE_HINT};
pub use sources::{dependencies, dependents, title_of, DependencyAccessor, ScoreLookup};
pub use state::PanelState;
pub use text::{explanation_lines, explanation_text, ProofLine, Segment, TextStyle};
