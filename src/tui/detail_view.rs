//! Detail panel: the selected issue, its metrics and the calculation proof.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{
    add_blank_line, add_label_value, add_section_header, add_text_block, proof_line,
};
use super::theme::Theme;
use crate::insights::{
    empty_message, explanation_lines, resolve_skip_state, title_of, DependencyAccessor,
    InsightsDashboard, ScoreLookup, SkipState,
};

/// Lines of the detail panel for the focused panel's selection.
pub fn detail_lines<D, S>(
    dashboard: &InsightsDashboard,
    deps: &D,
    scores: &S,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>>
where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let panel = dashboard.focused();
    let info = panel.info();
    let state = dashboard.state();
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("{} {} · {}", info.icon, info.title, info.short_desc),
        theme.title_style(true),
    )));
    add_blank_line(&mut lines);

    if let SkipState::Skipped { reason, hint } = resolve_skip_state(panel, scores) {
        lines.push(Line::from(Span::styled(
            format!("⏭ Skipped: {reason}"),
            theme.skipped_style(),
        )));
        lines.push(Line::from(Span::styled(hint, theme.muted_style())));
        return lines;
    }

    let Some(id) = dashboard.selected_id(panel) else {
        lines.push(Line::from(Span::styled(
            empty_message(panel),
            theme.muted_style(),
        )));
        return lines;
    };

    match deps.issue(id) {
        Some(issue) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} · {} · P{}",
                    issue.issue_type.name().to_uppercase(),
                    issue.status.label(),
                    issue.priority
                ),
                theme.muted_style(),
            )));
            add_label_value(&mut lines, "id", issue.id.clone(), theme, width);
            add_label_value(&mut lines, "title", issue.title.clone(), theme, width);
            if !issue.assignee.is_empty() {
                add_label_value(&mut lines, "assignee", issue.assignee.clone(), theme, width);
            }
            add_blank_line(&mut lines);
            add_text_block(&mut lines, "description", &issue.description, theme);
            add_text_block(&mut lines, "design", &issue.design, theme);
            add_text_block(
                &mut lines,
                "acceptance criteria",
                &issue.acceptance_criteria,
                theme,
            );
            add_text_block(&mut lines, "notes", &issue.notes, theme);

            if !issue.dependencies.is_empty() {
                add_section_header(&mut lines, "dependencies", theme);
                for dep in &issue.dependencies {
                    let target = title_of(deps, &dep.depends_on_id)
                        .filter(|t| !t.is_empty())
                        .unwrap_or(&dep.depends_on_id);
                    let done = deps
                        .issue(&dep.depends_on_id)
                        .is_some_and(|t| t.status.is_closed());
                    // Open blockers stand out; finished or soft links stay muted.
                    let kind_style = if dep.kind.is_blocking() && !done {
                        theme.skipped_style()
                    } else {
                        theme.muted_style()
                    };
                    let target = if done {
                        Span::styled(format!("{target} ✓"), theme.muted_style())
                    } else {
                        Span::raw(target.to_string())
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {} → ", dep.kind.name()), kind_style),
                        target,
                    ]));
                }
                add_blank_line(&mut lines);
            }
        }
        None => {
            add_label_value(&mut lines, "id", id.to_string(), theme, width);
            add_blank_line(&mut lines);
        }
    }

    if let Some(metrics) = dashboard.selected_metrics(scores) {
        add_section_header(&mut lines, "metrics", theme);
        lines.push(Line::from(metrics.values_row()));
        lines.push(Line::from(Span::styled(
            metrics.degree_row(),
            theme.muted_style(),
        )));
        add_blank_line(&mut lines);
    }

    if state.show_explanations() {
        add_text_block(&mut lines, "what is it", info.what_is, theme);
        add_text_block(&mut lines, "why it matters", info.why_useful, theme);
        add_text_block(&mut lines, "how to use it", info.how_to_use, theme);
    }

    if state.show_calculation() {
        if let Some(explanation) = dashboard.explain_selection(deps, scores) {
            lines.extend(
                explanation_lines(&explanation, width as usize)
                    .iter()
                    .map(|line| proof_line(line, theme)),
            );
        }
    }

    lines
}

/// Render the detail panel into `area`, honoring the detail scroll offset.
pub fn render_detail<D, S>(
    frame: &mut Frame,
    area: Rect,
    dashboard: &InsightsDashboard,
    deps: &D,
    scores: &S,
    theme: &Theme,
) where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Span::styled(" Details ", theme.title_style(false)));
    let width = block.inner(area).width;
    let lines = detail_lines(dashboard, deps, scores, width, theme);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((dashboard.state().detail_scroll(), 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Dependency, DependencyKind, GraphStats, InsightItem, Insights, Issue, IssueStatus,
        IssueStore, Metric, MetricFamily, MetricRunStatus,
    };

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn fixture() -> (InsightsDashboard, IssueStore, GraphStats) {
        let mut core = Issue::new("C", "Core lib").depends_on("D");
        core.description = "Shared parsing code".to_string();
        let store = IssueStore::new(vec![
            Issue::new("A", "Alpha").depends_on("C"),
            Issue::new("B", "Beta").depends_on("C"),
            core,
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
    fn test_detail_shows_issue_metrics_and_proof() {
        let (dashboard, store, stats) = fixture();
        let text = plain(&detail_lines(&dashboard, &store, &stats, 60, &Theme::default()));
        assert!(text.iter().any(|l| l == "  Shared parsing code"));
        assert!(text.iter().any(|l| l == "  blocks → D"));
        assert!(text.iter().any(|l| l.contains("Betweenness: 0.500")));
        assert!(text.iter().any(|l| l.contains("CALCULATION PROOF")));
        assert!(text.iter().any(|l| l.contains("Issues depending on this (2):")));
    }

    #[test]
    fn test_dependency_rows_mark_blockers_and_closed_targets() {
        let (dashboard, _, stats) = fixture();
        let mut core = Issue::new("C", "Core lib").depends_on("D").depends_on("E");
        core.dependencies.push(Dependency {
            issue_id: "C".to_string(),
            depends_on_id: "F".to_string(),
            kind: DependencyKind::Related,
            created_at: None,
            created_by: None,
        });
        let mut done = Issue::new("E", "Schema");
        done.status = IssueStatus::Closed;
        let store = IssueStore::new(vec![core, done]);
        let theme = Theme::default();

        let lines = detail_lines(&dashboard, &store, &stats, 60, &theme);
        let row = |text: &str| {
            lines
                .iter()
                .find(|l| plain(std::slice::from_ref(*l))[0] == text)
                .unwrap_or_else(|| panic!("missing row {text:?}"))
        };

        let open_blocker = row("  blocks → D");
        assert_eq!(open_blocker.spans[0].style, theme.skipped_style());
        let closed_blocker = row("  blocks → Schema ✓");
        assert_eq!(closed_blocker.spans[0].style, theme.muted_style());
        let related = row("  related → F");
        assert_eq!(related.spans[0].style, theme.muted_style());
    }

    #[test]
    fn test_calculation_toggle_hides_proof() {
        let (mut dashboard, store, stats) = fixture();
        dashboard.toggle_calculation_detail();
        let text = plain(&detail_lines(&dashboard, &store, &stats, 60, &Theme::default()));
        assert!(!text.iter().any(|l| l.contains("CALCULATION PROOF")));
        assert!(text.iter().any(|l| l.contains("Betweenness: 0.500")));
    }

    #[test]
    fn test_skipped_panel_shows_reason() {
        let (dashboard, store, mut stats) = fixture();
        stats.set_status(MetricFamily::Betweenness, MetricRunStatus::skipped(""));
        let text = plain(&detail_lines(&dashboard, &store, &stats, 60, &Theme::default()));
        assert!(text.iter().any(|l| l == "⏭ Skipped: Skipped for performance"));
        assert!(!text.iter().any(|l| l.contains("CALCULATION PROOF")));
    }

    #[test]
    fn test_empty_panel_shows_message() {
        let (mut dashboard, store, stats) = fixture();
        dashboard.focus(crate::insights::Panel::Cycles);
        let text = plain(&detail_lines(&dashboard, &store, &stats, 60, &Theme::default()));
        assert!(text.iter().any(|l| l == "✓ No cycles detected"));
    }
}
