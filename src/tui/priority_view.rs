//! The priority row: triage picks laid out side by side as cards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::panel_view::SELECTION_MARKER;
use super::theme::Theme;
use crate::insights::{
    truncate_with_ellipsis, DependencyAccessor, InsightsDashboard, Panel, PanelEntry,
    PanelStatus, ScoreLookup,
};
use crate::model::TopPick;

/// Cards shown at once; the window scrolls with the selection.
pub const PRIORITY_CARDS: usize = 5;

/// Reasons listed per card.
const CARD_REASONS: usize = 2;

/// Text lines of one pick card, `width` cells wide.
pub fn card_lines<D: DependencyAccessor + ?Sized>(
    pick: &TopPick,
    index: usize,
    selected: bool,
    deps: &D,
    width: usize,
) -> Vec<String> {
    let marker = if selected { SELECTION_MARKER } else { "" };
    let issue = deps.issue(&pick.id);
    let title = issue
        .map(|i| i.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(&pick.title);
    let status = match issue {
        Some(issue) => format!("{} · P{}", issue.status.label(), issue.priority),
        None => pick.id.clone(),
    };

    let mut lines = vec![
        format!("{marker}#{} score {:.2}", index + 1, pick.score),
        truncate_with_ellipsis(title, width),
        truncate_with_ellipsis(&status, width),
        format!("Unblocks: {}", pick.unblocks),
    ];
    lines.extend(
        pick.reasons
            .iter()
            .take(CARD_REASONS)
            .map(|reason| truncate_with_ellipsis(&format!("• {reason}"), width)),
    );
    lines
}

/// Render the priority row into `area`.
pub fn render_priority<D, S>(
    frame: &mut Frame,
    area: Rect,
    dashboard: &mut InsightsDashboard,
    deps: &D,
    scores: &S,
    theme: &Theme,
) where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    let panel = Panel::Priority;
    let show_explanations = dashboard.state().show_explanations();
    let focused = dashboard.focused() == panel;
    let info = panel.info();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style(focused))
        .title(Span::styled(
            format!(" {} {} ({}) ", info.icon, info.title, info.short_desc),
            theme.title_style(focused),
        ));
    let mut inner = block.inner(area);
    frame.render_widget(block, area);

    if show_explanations && inner.height > 1 {
        let what_is = truncate_with_ellipsis(info.what_is, inner.width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(what_is, theme.muted_style())),
            Rect { height: 1, ..inner },
        );
        inner.y += 1;
        inner.height -= 1;
    }

    let view = dashboard.panel_view(panel, PRIORITY_CARDS, scores);
    match &view.status {
        PanelStatus::Skipped { reason, hint } => {
            let lines = vec![
                Line::from(Span::styled(format!("⏭ Skipped: {reason}"), theme.skipped_style())),
                Line::from(Span::styled(*hint, theme.muted_style())),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
        PanelStatus::Empty { message } => {
            frame.render_widget(
                Paragraph::new(Span::styled(*message, theme.muted_style())),
                inner,
            );
        }
        PanelStatus::Populated => {
            let constraints = vec![Constraint::Ratio(1, view.rows.len() as u32); view.rows.len()];
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(inner);

            for (row, cell) in view.rows.iter().zip(cells.iter()) {
                let PanelEntry::Pick(pick) = row.entry else {
                    continue;
                };
                let card = Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(row.selected));
                let width = card.inner(*cell).width as usize;
                let lines: Vec<Line> = card_lines(pick, row.index, row.selected, deps, width)
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| {
                        let style = match i {
                            0 if row.selected => theme.selected_style(),
                            0 => theme.badge_style(),
                            1 => theme.title_style(false),
                            _ => theme.muted_style(),
                        };
                        Line::from(Span::styled(text, style))
                    })
                    .collect();
                frame.render_widget(Paragraph::new(lines).block(card), *cell);
            }
        }
    }
}
