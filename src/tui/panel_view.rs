//! Rendering of one metric panel in the grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::visible_rows;
use super::theme::Theme;
use crate::insights::{
    cycle_chain, format_insight_value, title_of, truncate_with_ellipsis, DependencyAccessor,
    InsightsDashboard, Panel, PanelEntry, PanelRow, PanelStatus, ScoreLookup,
};

pub const SELECTION_MARKER: &str = "▸ ";
const NO_MARKER: &str = "  ";

/// Text of a row: marker, label, optional right-aligned badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub marker: &'static str,
    pub label: String,
    pub badge: Option<String>,
}

impl RowText {
    /// Spaces between label and badge so the badge ends at `width`.
    fn badge_padding(&self, badge: &str, width: usize) -> String {
        let used = self.marker.width() + self.label.width() + badge.width();
        " ".repeat(width.saturating_sub(used).max(1))
    }

    /// The row as plain text, `width` cells wide when it has a badge.
    pub fn to_plain(&self, width: usize) -> String {
        match &self.badge {
            Some(badge) => format!(
                "{}{}{}{}",
                self.marker,
                self.label,
                self.badge_padding(badge, width),
                badge
            ),
            None => format!("{}{}", self.marker, self.label),
        }
    }
}

/// Lay out a panel row for a column `width` cells wide.
pub fn row_text<D>(row: &PanelRow<'_>, deps: &D, width: usize) -> RowText
where
    D: DependencyAccessor + ?Sized,
{
    let marker = if row.selected { SELECTION_MARKER } else { NO_MARKER };
    let room = width.saturating_sub(marker.width());

    let (label, badge) = match row.entry {
        PanelEntry::Item(item) => {
            let badge = format_insight_value(item.value);
            let room = room.saturating_sub(badge.width() + 1);
            (issue_label(&item.id, deps, room), Some(badge))
        }
        PanelEntry::CutPoint(id) => (issue_label(id, deps, room), None),
        PanelEntry::Cycle(cycle) => (cycle_chain(cycle, deps, room), None),
        PanelEntry::Pick(pick) => {
            let badge = format!("{:.2}", pick.score);
            let room = room.saturating_sub(badge.width() + 1);
            let title = title_of(deps, &pick.id)
                .filter(|t| !t.is_empty())
                .unwrap_or(&pick.title);
            (truncate_with_ellipsis(title, room), Some(badge))
        }
    };

    RowText {
        marker,
        label,
        badge,
    }
}

/// Title of a known issue, else the raw id.
fn issue_label<D: DependencyAccessor + ?Sized>(id: &str, deps: &D, width: usize) -> String {
    let text = title_of(deps, id).filter(|t| !t.is_empty()).unwrap_or(id);
    truncate_with_ellipsis(text, width)
}

/// Render a grid panel into `area`.
pub fn render_panel<D, S>(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut InsightsDashboard,
    panel: Panel,
    deps: &D,
    scores: &S,
    theme: &Theme,
) where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let show_explanations = dashboard.state().show_explanations();
    let focused = dashboard.focused() == panel;
    let info = panel.info();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(Span::styled(
            format!(" {} {} ", info.icon, info.title),
            theme.title_style(focused),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    if show_explanations {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let list_area = chunks[chunks.len() - 1];

    let rows = visible_rows(area.height, show_explanations)
        .min(list_area.height as usize)
        .max(1);
    let width = inner.width as usize;
    let view = dashboard.panel_view(panel, rows, scores);

    let mut header = vec![Span::styled(
        format!("{} [{}]", info.short_desc, view.item_count),
        theme.muted_style(),
    )];
    if let Some(indicator) = &view.scroll_indicator {
        header.push(Span::raw("  "));
        header.push(Span::styled(format!("↕ {indicator}"), theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    if show_explanations {
        let what_is = truncate_with_ellipsis(info.what_is, width);
        frame.render_widget(
            Paragraph::new(Span::styled(what_is, theme.muted_style())),
            chunks[1],
        );
    }

    let body: Vec<Line> = match &view.status {
        PanelStatus::Skipped { reason, hint } => vec![
            Line::from(Span::styled(
                truncate_with_ellipsis(&format!("⏭ Skipped: {reason}"), width),
                theme.skipped_style(),
            )),
            Line::from(Span::styled(
                truncate_with_ellipsis(hint, width),
                theme.muted_style(),
            )),
        ],
        PanelStatus::Empty { message } => {
            let style = if panel == Panel::Cycles {
                theme.healthy_style()
            } else {
                theme.muted_style()
            };
            vec![Line::from(Span::styled(*message, style))]
        }
        PanelStatus::Populated => view
            .rows
            .iter()
            .map(|row| row_line(&row_text(row, deps, width), row.selected, width, theme))
            .collect(),
    };
    frame.render_widget(Paragraph::new(body), list_area);
}

fn row_line(text: &RowText, selected: bool, width: usize, theme: &Theme) -> Line<'static> {
    let label_style = if selected {
        theme.selected_style()
    } else {
        Style::default().fg(theme.text)
    };
    let mut spans = vec![
        Span::styled(text.marker, theme.selected_style()),
        Span::styled(text.label.clone(), label_style),
    ];
    if let Some(badge) = &text.badge {
        spans.push(Span::raw(text.badge_padding(badge, width)));
        spans.push(Span::styled(badge.clone(), theme.badge_style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cycle, InsightItem, Issue, IssueStore, TopPick};

    fn store() -> IssueStore {
        IssueStore::new(vec![
            Issue::new("A", "Alpha"),
            Issue::new("B", "Beta"),
            Issue::new("C", "Gamma"),
        ])
    }

    #[test]
    fn test_selected_row_has_marker_and_badge() {
        let item = InsightItem::new("A", 0.5);
        let row = PanelRow {
            index: 0,
            entry: PanelEntry::Item(&item),
            selected: true,
        };
        let text = row_text(&row, &store(), 20);
        assert_eq!(text.marker, SELECTION_MARKER);
        assert_eq!(text.to_plain(20), "▸ Alpha        0.500");
    }

    #[test]
    fn test_unknown_id_shows_raw_id() {
        let item = InsightItem::new("zz-9", 2.0);
        let row = PanelRow {
            index: 0,
            entry: PanelEntry::Item(&item),
            selected: false,
        };
        let text = row_text(&row, &store(), 30);
        assert_eq!(text.marker, "  ");
        assert_eq!(text.label, "zz-9");
        assert_eq!(text.badge.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_cycle_row_closes_loop() {
        let cycle: Cycle = ["A", "B", "C"].into_iter().collect();
        let row = PanelRow {
            index: 0,
            entry: PanelEntry::Cycle(&cycle),
            selected: false,
        };
        let text = row_text(&row, &store(), 60);
        assert_eq!(text.label, "Alpha → Beta → Gamma → Alpha");
        assert!(text.badge.is_none());
    }

    #[test]
    fn test_long_title_is_truncated_to_fit_badge() {
        let store = IssueStore::new(vec![Issue::new("A", "A very long issue title here")]);
        let item = InsightItem::new("A", 0.25);
        let row = PanelRow {
            index: 0,
            entry: PanelEntry::Item(&item),
            selected: false,
        };
        let plain = row_text(&row, &store, 20).to_plain(20);
        assert_eq!(plain.width(), 20);
        assert!(plain.contains('…'));
        assert!(plain.ends_with("0.250"));
    }

    #[test]
    fn test_pick_falls_back_to_own_title() {
        let pick = TopPick {
            id: "P".to_string(),
            title: "Pick title".to_string(),
            score: 0.75,
            unblocks: 2,
            reasons: Vec::new(),
        };
        let row = PanelRow {
            index: 0,
            entry: PanelEntry::Pick(&pick),
            selected: false,
        };
        let text = row_text(&row, &store(), 40);
        assert_eq!(text.label, "Pick title");
        assert_eq!(text.badge.as_deref(), Some("0.75"));
    }
}
