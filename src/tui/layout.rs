//! Screen layout for the dashboard: a 3x3 metric grid, the priority row,
//! and an optional detail panel on wide terminals.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::insights::Panel;

/// The detail panel only fits beside the grid above this width.
pub const DETAIL_PANEL_MIN_WIDTH: u16 = 120;

/// Fewest list rows a panel is given, however small the terminal.
pub const MIN_VISIBLE_ROWS: usize = 3;

/// Panels laid out in the grid, row by row.
pub const GRID_PANELS: [Panel; 9] = [
    Panel::Bottlenecks,
    Panel::Keystones,
    Panel::Influencers,
    Panel::Hubs,
    Panel::Authorities,
    Panel::Cores,
    Panel::ArticulationPoints,
    Panel::Slack,
    Panel::Cycles,
];

/// Screen regions for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub grid: Vec<(Panel, Rect)>,
    pub priority: Rect,
    pub detail: Option<Rect>,
    pub footer: Rect,
}

impl DashboardLayout {
    /// Area of a panel, grid or priority row.
    pub fn panel_area(&self, panel: Panel) -> Rect {
        if panel == Panel::Priority {
            return self.priority;
        }
        self.grid
            .iter()
            .find(|(p, _)| *p == panel)
            .map(|(_, area)| *area)
            .unwrap_or_default()
    }
}

/// Whether the detail panel is drawn at this width.
pub fn shows_detail(width: u16, show_detail_panel: bool) -> bool {
    show_detail_panel && width > DETAIL_PANEL_MIN_WIDTH
}

/// Height of the priority row; one extra line holds the description.
pub fn priority_height(show_explanations: bool) -> u16 {
    if show_explanations {
        10
    } else {
        9
    }
}

/// Split the frame into header, panel grid, priority row, detail and footer.
pub fn calculate_layout(area: Rect, show_detail: bool, show_explanations: bool) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let (main, detail) = if show_detail {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[1], None)
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Length(priority_height(show_explanations)),
        ])
        .split(main);

    let mut grid = Vec::with_capacity(GRID_PANELS.len());
    for (row, panels) in GRID_PANELS.chunks(3).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(sections[row]);
        grid.extend(panels.iter().copied().zip(cells.iter().copied()));
    }

    DashboardLayout {
        header: rows[0],
        grid,
        priority: sections[3],
        detail,
        footer: rows[2],
    }
}

/// List rows available to a grid panel of `panel_height` cells.
///
/// Borders, the header line and spacing take seven rows; the description
/// takes one more. Never fewer than [`MIN_VISIBLE_ROWS`].
pub fn visible_rows(panel_height: u16, show_explanations: bool) -> usize {
    let chrome = if show_explanations { 8 } else { 7 };
    (panel_height as usize)
        .saturating_sub(chrome)
        .max(MIN_VISIBLE_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_rows_formula() {
        assert_eq!(visible_rows(20, false), 13);
        assert_eq!(visible_rows(20, true), 12);
    }

    #[test]
    fn test_visible_rows_minimum() {
        assert_eq!(visible_rows(0, true), MIN_VISIBLE_ROWS);
        assert_eq!(visible_rows(9, false), MIN_VISIBLE_ROWS);
    }

    #[test]
    fn test_detail_needs_wide_terminal() {
        assert!(!shows_detail(120, true));
        assert!(shows_detail(121, true));
        assert!(!shows_detail(200, false));
    }

    #[test]
    fn test_layout_places_every_panel() {
        let layout = calculate_layout(Rect::new(0, 0, 150, 50), true, true);
        assert_eq!(layout.grid.len(), 9);
        assert!(layout.detail.is_some());
        assert_eq!(layout.priority.height, 10);
        for panel in Panel::ALL {
            let area = layout.panel_area(panel);
            assert!(area.width > 0 && area.height > 0, "{panel:?} has no area");
        }
    }

    #[test]
    fn test_grid_rows_are_ordered() {
        let layout = calculate_layout(Rect::new(0, 0, 100, 40), false, false);
        let bottlenecks = layout.panel_area(Panel::Bottlenecks);
        let hubs = layout.panel_area(Panel::Hubs);
        let keystones = layout.panel_area(Panel::Keystones);
        assert!(hubs.y > bottlenecks.y);
        assert_eq!(keystones.y, bottlenecks.y);
        assert!(keystones.x > bottlenecks.x);
        assert!(layout.detail.is_none());
    }
}
