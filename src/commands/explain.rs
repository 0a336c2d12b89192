//! `depmap explain`: print one panel entry's drill-down without a terminal UI.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::errors::DepmapError;
use crate::insights::{
    empty_message, explanation_text, resolve_skip_state, Explanation, InsightsDashboard,
    MetricSummary, Panel, SkipState,
};
use crate::io::load_inputs;
use crate::model::{GraphStats, IssueStore};
use crate::observability::{set_phase, set_snapshot, SessionPhase};

#[derive(Debug, Clone)]
pub struct ExplainConfig {
    pub snapshot: PathBuf,
    pub issues: Option<PathBuf>,
    pub panel: Panel,
    pub index: Option<usize>,
    pub id: Option<String>,
    pub format: OutputFormat,
    pub width: usize,
}

/// Result of explaining one panel entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainReport {
    pub panel: Panel,
    pub title: &'static str,
    pub item_count: usize,
    pub skip: SkipState,
    /// Set when the panel has no entries and is not skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<Explanation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricSummary>,
}

pub fn explain_entry(config: ExplainConfig) -> Result<()> {
    let _snapshot = set_snapshot(&config.snapshot);
    let inputs = load_inputs(&config.snapshot, config.issues.as_deref())
        .with_context(|| format!("Failed to load {}", config.snapshot.display()))?;
    let _phase = set_phase(SessionPhase::Explaining);

    let mut dashboard = InsightsDashboard::new(inputs.insights, inputs.top_picks);
    dashboard.focus(config.panel);
    if let Some(id) = &config.id {
        if !dashboard.select_id(config.panel, id) {
            return Err(DepmapError::invalid_argument(format!(
                "no entry for '{id}' in panel {}",
                config.panel.title()
            ))
            .into());
        }
    } else if let Some(index) = config.index {
        let count = dashboard.item_count(config.panel);
        if index >= count {
            return Err(DepmapError::invalid_argument(format!(
                "index {index} out of range: panel {} has {count} entries",
                config.panel.title()
            ))
            .into());
        }
        dashboard.select_index(config.panel, index);
    }

    let report = build_report(&dashboard, config.panel, &inputs.store, &inputs.stats);
    let output = match config.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => render_report_text(&report, config.width),
    };
    println!("{output}");
    Ok(())
}

/// Gather the explanation and metric values for `panel`'s selection.
pub fn build_report(
    dashboard: &InsightsDashboard,
    panel: Panel,
    store: &IssueStore,
    stats: &GraphStats,
) -> ExplainReport {
    let skip = resolve_skip_state(panel, stats);
    let item_count = dashboard.item_count(panel);
    let empty = (!skip.is_skipped() && item_count == 0).then(|| empty_message(panel));
    let explanation = dashboard.explain(panel, store, stats);
    let metrics = explanation
        .as_ref()
        .map(|e| MetricSummary::for_issue(stats, &e.subject.id));

    ExplainReport {
        panel,
        title: panel.title(),
        item_count,
        skip,
        empty,
        explanation,
        metrics,
    }
}

/// Plain-text rendering of a report.
pub fn render_report_text(report: &ExplainReport, width: usize) -> String {
    let info = report.panel.info();
    let mut out = vec![format!("{} {} ({})", info.icon, info.title, info.short_desc)];

    if let SkipState::Skipped { reason, hint } = &report.skip {
        out.push(format!("Skipped: {reason}"));
        out.push((*hint).to_string());
        return out.join("\n");
    }
    if let Some(message) = report.empty {
        out.push(message.to_string());
        return out.join("\n");
    }

    if let Some(explanation) = &report.explanation {
        out.push(format!(
            "Selected: {} [{}]",
            explanation.subject.label(),
            explanation.subject.id
        ));
        out.push(String::new());
        out.push(explanation_text(explanation, width));
    }
    if let Some(metrics) = &report.metrics {
        out.push(String::new());
        out.push(metrics.values_row());
        out.push(metrics.degree_row());
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InsightItem, Insights, Issue, Metric, MetricFamily, MetricRunStatus};

    fn fixture() -> (InsightsDashboard, IssueStore, GraphStats) {
        let store = IssueStore::new(vec![
            Issue::new("A", "Alpha").depends_on("C"),
            Issue::new("B", "Beta").depends_on("C"),
            Issue::new("C", "Core lib"),
        ]);
        let mut stats = GraphStats::default();
        stats.set_score(Metric::Betweenness, "C", 0.5);
        let dashboard = InsightsDashboard::new(
            Insights {
                bottlenecks: vec![InsightItem::new("C", 0.5)],
                ..Insights::default()
            },
            Vec::new(),
        );
        (dashboard, store, stats)
    }

    #[test]
    fn test_text_report_lists_dependents() {
        let (dashboard, store, stats) = fixture();
        let report = build_report(&dashboard, Panel::Bottlenecks, &store, &stats);
        let text = render_report_text(&report, 80);
        assert!(text.contains("Selected: Core lib [C]"));
        assert!(text.contains("Issues depending on this (2):"));
        assert!(text.contains("  ↓ Alpha"));
        assert!(text.contains("Betweenness: 0.500"));
        assert!(text.contains("In: 0 ←  Out: 0 →"));
    }

    #[test]
    fn test_skipped_report_has_no_explanation() {
        let (dashboard, store, mut stats) = fixture();
        stats.set_status(MetricFamily::Betweenness, MetricRunStatus::skipped("too big"));
        let report = build_report(&dashboard, Panel::Bottlenecks, &store, &stats);
        assert!(report.explanation.is_none());
        let text = render_report_text(&report, 80);
        assert!(text.contains("Skipped: too big"));
        assert!(text.contains("--force-full-analysis"));
    }

    #[test]
    fn test_empty_cycles_report_is_healthy() {
        let (dashboard, store, stats) = fixture();
        let report = build_report(&dashboard, Panel::Cycles, &store, &stats);
        assert_eq!(report.empty, Some("✓ No cycles detected"));
        assert!(!report.skip.is_skipped());
    }

    #[test]
    fn test_json_report_shape() {
        let (dashboard, store, stats) = fixture();
        let report = build_report(&dashboard, Panel::Bottlenecks, &store, &stats);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["panel"], "bottlenecks");
        assert_eq!(json["skip"]["state"], "available");
        assert_eq!(json["explanation"]["proof"]["kind"], "junction");
        assert_eq!(json["explanation"]["proof"]["dependents"]["total"], 2);
    }
}
