//! Decides whether a panel shows its items or a "skipped" notice.
//!
//! Live run status wins. Only when a family has no recorded status does the
//! static analyzer configuration get a say. With neither, the panel is shown.

use serde::Serialize;

use super::panel::Panel;
use super::sources::ScoreLookup;

/// Reason shown when the upstream reason is empty.
pub const DEFAULT_SKIP_REASON: &str = "Skipped for performance";

/// Hint shown under every skip notice.
pub const FORCE_RECOMPUTE_HINT: &str = "Use --force-full-analysis to compute";

/// Whether a panel's backing metric can be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SkipState {
    Available,
    Skipped { reason: String, hint: &'static str },
}

impl SkipState {
    fn skipped(reason: Option<&str>) -> Self {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_SKIP_REASON);
        SkipState::Skipped {
            reason: reason.to_string(),
            hint: FORCE_RECOMPUTE_HINT,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SkipState::Skipped { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SkipState::Available => None,
            SkipState::Skipped { reason, .. } => Some(reason),
        }
    }
}

/// Resolve the skip state of `panel` from run status, then configuration.
pub fn resolve_skip_state<S: ScoreLookup + ?Sized>(panel: Panel, scores: &S) -> SkipState {
    let Some(family) = panel.metric_family() else {
        return SkipState::Available;
    };

    if let Some(status) = scores.run_status(family) {
        return if status.is_unavailable() {
            SkipState::skipped(status.reason.as_deref())
        } else {
            SkipState::Available
        };
    }

    match scores.metric_config().and_then(|config| config.switch(family)) {
        Some(switch) if !switch.compute => SkipState::skipped(Some(switch.skip_reason.as_str())),
        _ => SkipState::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GraphStats, MetricConfig, MetricFamily, MetricRunStatus};

    #[test]
    fn test_no_status_no_config_is_available() {
        let stats = GraphStats::default();
        for panel in Panel::ALL {
            assert_eq!(resolve_skip_state(panel, &stats), SkipState::Available);
        }
    }

    #[test]
    fn test_timed_out_status_skips_panel_with_reason() {
        let mut stats = GraphStats::default();
        stats.set_status(
            MetricFamily::Betweenness,
            MetricRunStatus::timed_out("exceeded 2s budget"),
        );
        let state = resolve_skip_state(Panel::Bottlenecks, &stats);
        assert!(state.is_skipped());
        assert_eq!(state.reason(), Some("exceeded 2s budget"));
    }

    #[test]
    fn test_hits_status_skips_both_hubs_and_authorities() {
        let mut stats = GraphStats::default();
        stats.set_status(MetricFamily::Hits, MetricRunStatus::skipped(""));
        for panel in [Panel::Hubs, Panel::Authorities] {
            let state = resolve_skip_state(panel, &stats);
            assert_eq!(state.reason(), Some(DEFAULT_SKIP_REASON));
        }
        assert!(!resolve_skip_state(Panel::Influencers, &stats).is_skipped());
    }

    #[test]
    fn test_critical_path_covers_keystones_and_slack() {
        let mut stats = GraphStats::default();
        stats.set_status(
            MetricFamily::CriticalPath,
            MetricRunStatus::skipped("too many nodes"),
        );
        assert!(resolve_skip_state(Panel::Keystones, &stats).is_skipped());
        assert!(resolve_skip_state(Panel::Slack, &stats).is_skipped());
    }

    #[test]
    fn test_computed_status_overrides_config() {
        let mut stats = GraphStats::default();
        stats.set_status(MetricFamily::Cycles, MetricRunStatus::computed());
        stats.config = Some(MetricConfig::default().with_disabled(MetricFamily::Cycles, "off"));
        assert!(!resolve_skip_state(Panel::Cycles, &stats).is_skipped());
    }

    #[test]
    fn test_config_fallback_when_status_missing() {
        let mut stats = GraphStats::default();
        stats.config = Some(
            MetricConfig::default().with_disabled(MetricFamily::Cycles, "graph has 40k edges"),
        );
        let state = resolve_skip_state(Panel::Cycles, &stats);
        assert_eq!(state.reason(), Some("graph has 40k edges"));
    }

    #[test]
    fn test_panels_without_family_never_skip() {
        let mut stats = GraphStats::default();
        for family in [
            MetricFamily::Betweenness,
            MetricFamily::Eigenvector,
            MetricFamily::Hits,
            MetricFamily::CriticalPath,
            MetricFamily::Cycles,
        ] {
            stats.set_status(family, MetricRunStatus::skipped("x"));
        }
        for panel in [Panel::Cores, Panel::ArticulationPoints, Panel::Priority] {
            assert_eq!(resolve_skip_state(panel, &stats), SkipState::Available);
        }
    }

    #[test]
    fn test_skip_state_carries_hint() {
        let mut stats = GraphStats::default();
        stats.set_status(MetricFamily::Eigenvector, MetricRunStatus::skipped("x"));
        match resolve_skip_state(Panel::Influencers, &stats) {
            SkipState::Skipped { hint, .. } => assert_eq!(hint, FORCE_RECOMPUTE_HINT),
            SkipState::Available => panic!("expected skipped"),
        }
    }
}
