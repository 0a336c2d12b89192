//! `depmap summary`: every panel's status and top entries as text.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::insights::{
    cycle_chain, format_insight_value, truncate_with_ellipsis, DependencyAccessor,
    InsightsDashboard, Panel, PanelEntry, PanelStatus, ScoreLookup,
};
use crate::io::load_inputs;
use crate::observability::set_snapshot;

const LINE_WIDTH: usize = 72;

#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub snapshot: PathBuf,
    pub issues: Option<PathBuf>,
    pub top: usize,
}

pub fn print_summary(config: SummaryConfig) -> Result<()> {
    let _snapshot = set_snapshot(&config.snapshot);
    let inputs = load_inputs(&config.snapshot, config.issues.as_deref())
        .with_context(|| format!("Failed to load {}", config.snapshot.display()))?;
    let mut dashboard = InsightsDashboard::new(inputs.insights, inputs.top_picks);
    println!(
        "{}",
        render_summary(&mut dashboard, &inputs.store, &inputs.stats, config.top)
    );
    Ok(())
}

/// One block per panel: header, then a status line or the top rows.
pub fn render_summary<D, S>(
    dashboard: &mut InsightsDashboard,
    deps: &D,
    scores: &S,
    top: usize,
) -> String
where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let mut out = Vec::new();
    for panel in Panel::ALL {
        let view = dashboard.panel_view(panel, top, scores);
        out.push(format!(
            "{} {} ({}) [{}]",
            view.info.icon, view.info.title, view.info.short_desc, view.item_count
        ));
        match &view.status {
            PanelStatus::Skipped { reason, .. } => out.push(format!("  skipped: {reason}")),
            PanelStatus::Empty { message } => out.push(format!("  {message}")),
            PanelStatus::Populated => {
                for row in &view.rows {
                    out.push(format!("  {}", summary_row(row.entry, deps)));
                }
                let hidden = view.item_count.saturating_sub(view.rows.len());
                if hidden > 0 {
                    out.push(format!("  ... +{hidden} more"));
                }
            }
        }
        out.push(String::new());
    }
    out.join("\n").trim_end().to_string()
}

fn summary_row<D: DependencyAccessor + ?Sized>(entry: PanelEntry<'_>, deps: &D) -> String {
    match entry {
        PanelEntry::Cycle(cycle) => cycle_chain(cycle, deps, LINE_WIDTH),
        PanelEntry::CutPoint(id) => label_for(id, deps),
        PanelEntry::Item(item) => format!(
            "{:>8}  {}",
            format_insight_value(item.value),
            label_for(&item.id, deps)
        ),
        PanelEntry::Pick(pick) => {
            let title = deps
                .issue(&pick.id)
                .map(|issue| issue.title.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or(&pick.title);
            format!(
                "{:>8.2}  {}  (unblocks {})",
                pick.score,
                truncate_with_ellipsis(title, 40),
                pick.unblocks
            )
        }
    }
}

fn label_for<D: DependencyAccessor + ?Sized>(id: &str, deps: &D) -> String {
    match deps.issue(id) {
        Some(issue) if !issue.title.is_empty() => {
            format!("{id}  {}", truncate_with_ellipsis(&issue.title, 50))
        }
        _ => id.to_string(),
    }
}
