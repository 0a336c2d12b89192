//! Whole-screen rendering: header, panel grid, priority row, detail, footer.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::path::Path;

use super::app::{StatusKind, StatusMessage};
use super::detail_view::render_detail;
use super::layout::{calculate_layout, shows_detail};
use super::panel_view::render_panel;
use super::priority_view::render_priority;
use super::theme::Theme;
use crate::insights::{DependencyAccessor, InsightsDashboard, ScoreLookup};

/// Render one frame of the dashboard.
pub fn render<D, S>(
    frame: &mut Frame,
    dashboard: &mut InsightsDashboard,
    deps: &D,
    scores: &S,
    snapshot: &Path,
    status: Option<&StatusMessage>,
) where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let theme = Theme::default();
    let area = frame.area();
    let state = dashboard.state();
    let layout = calculate_layout(
        area,
        shows_detail(area.width, state.show_detail_panel()),
        state.show_explanations(),
    );

    render_header(frame, layout.header, dashboard, deps, snapshot, &theme);
    for (panel, panel_area) in &layout.grid {
        render_panel(frame, *panel_area, dashboard, *panel, deps, scores, &theme);
    }
    render_priority(frame, layout.priority, dashboard, deps, scores, &theme);
    if let Some(detail) = layout.detail {
        render_detail(frame, detail, dashboard, deps, scores, &theme);
    }
    render_footer(frame, layout.footer, dashboard, status, &theme);
}

fn render_header<D: DependencyAccessor + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    dashboard: &InsightsDashboard,
    deps: &D,
    snapshot: &Path,
    theme: &Theme,
) {
    let name = snapshot
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| snapshot.display().to_string());
    let focused = dashboard.focused();

    let header = Line::from(vec![
        Span::styled("depmap insights", theme.title_style(true)),
        Span::raw("  "),
        Span::styled(name, theme.muted_style()),
        Span::raw("  "),
        Span::styled(
            format!("Issues: {}", deps.issue_ids().len()),
            Style::default().fg(theme.text),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Focus: {} {}", focused.info().icon, focused.title()),
            Style::default().fg(theme.accent()),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    dashboard: &InsightsDashboard,
    status: Option<&StatusMessage>,
    theme: &Theme,
) {
    if let Some(message) = status {
        let style = match message.kind {
            StatusKind::Info => theme.healthy_style(),
            StatusKind::Error => theme.skipped_style(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message.text.clone(), style)),
            area,
        );
        return;
    }

    let state = dashboard.state();
    let on_off = |on: bool| if on { "on" } else { "off" };
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.accent()));

    let footer = Line::from(vec![
        key("↑↓/jk"),
        Span::raw(":Nav  "),
        key("←→/hl/Tab"),
        Span::raw(":Panel  "),
        key("^j/^k"),
        Span::raw(":Scroll  "),
        key("e"),
        Span::raw(format!(":Explain({})  ", on_off(state.show_explanations()))),
        key("x"),
        Span::raw(format!(":Proof({})  ", on_off(state.show_calculation()))),
        key("d"),
        Span::raw(format!(":Detail({})  ", on_off(state.show_detail_panel()))),
        key("r"),
        Span::raw(":Reload  "),
        key("q"),
        Span::raw(":Quit"),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}
