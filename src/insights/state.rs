//! Focus, per-panel selection and scroll offsets, display toggles.
//!
//! Pure state container with no I/O. Item counts are passed in by the
//! caller, which owns the collections backing each panel.

use std::ops::Range;

use super::panel::{Panel, PanelMap};
use super::scroll::{adjust_scroll_offset, calculate_visible_range, clamp_selection};

/// Navigation and verbosity state of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    focused: Panel,
    selected: PanelMap<usize>,
    scroll: PanelMap<usize>,
    /// Rows each panel showed at its last render; 0 until first render.
    visible_rows: PanelMap<usize>,
    show_explanations: bool,
    show_calculation: bool,
    show_detail_panel: bool,
    detail_scroll: u16,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            focused: Panel::Bottlenecks,
            selected: PanelMap::default(),
            scroll: PanelMap::default(),
            visible_rows: PanelMap::default(),
            show_explanations: true,
            show_calculation: true,
            show_detail_panel: true,
            detail_scroll: 0,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Panel {
        self.focused
    }

    pub fn focus(&mut self, panel: Panel) {
        if self.focused != panel {
            self.focused = panel;
            self.detail_scroll = 0;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus(self.focused.prev());
    }

    pub fn selected_index(&self, panel: Panel) -> usize {
        self.selected[panel]
    }

    pub fn scroll_offset(&self, panel: Panel) -> usize {
        self.scroll[panel]
    }

    /// Move the focused panel's selection up; no-op at the top or when empty.
    pub fn move_up(&mut self, item_count: usize) {
        let panel = self.focused;
        if item_count == 0 || self.selected[panel] == 0 {
            return;
        }
        let index = clamp_selection(self.selected[panel] - 1, item_count);
        self.set_selection(panel, index);
    }

    /// Move the focused panel's selection down; no-op at the bottom or when empty.
    pub fn move_down(&mut self, item_count: usize) {
        let panel = self.focused;
        if item_count == 0 || self.selected[panel] + 1 >= item_count {
            return;
        }
        self.set_selection(panel, self.selected[panel] + 1);
    }

    /// Select `index` in `panel`, clamped to the panel's items.
    pub fn select(&mut self, panel: Panel, index: usize, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.set_selection(panel, clamp_selection(index, item_count));
    }

    fn set_selection(&mut self, panel: Panel, index: usize) {
        if self.selected[panel] != index {
            self.detail_scroll = 0;
        }
        self.selected[panel] = index;
        self.follow_selection(panel);
    }

    /// Re-run the scroll window against the last known viewport.
    fn follow_selection(&mut self, panel: Panel) {
        let rows = self.visible_rows[panel];
        if rows > 0 {
            self.scroll[panel] = adjust_scroll_offset(self.selected[panel], self.scroll[panel], rows);
        } else if self.selected[panel] < self.scroll[panel] {
            self.scroll[panel] = self.selected[panel];
        }
    }

    /// Record the viewport size for `panel` and return its visible range.
    pub fn sync_scroll(&mut self, panel: Panel, visible_rows: usize, item_count: usize) -> Range<usize> {
        let rows = visible_rows.max(1);
        self.visible_rows[panel] = rows;
        if item_count > 0 {
            self.scroll[panel] = adjust_scroll_offset(self.selected[panel], self.scroll[panel], rows);
        }
        calculate_visible_range(self.scroll[panel], rows, item_count)
    }

    pub fn visible_rows(&self, panel: Panel) -> usize {
        self.visible_rows[panel]
    }

    /// Clamp every panel against new item counts after a data refresh.
    ///
    /// Panels that became empty keep their last index; it is re-clamped once
    /// they have items again.
    pub fn reclamp(&mut self, counts: &PanelMap<usize>) {
        for panel in Panel::ALL {
            let count = counts[panel];
            if count == 0 {
                continue;
            }
            self.selected[panel] = clamp_selection(self.selected[panel], count);
            self.follow_selection(panel);
        }
        self.detail_scroll = 0;
    }

    pub fn show_explanations(&self) -> bool {
        self.show_explanations
    }

    pub fn set_show_explanations(&mut self, show: bool) {
        self.show_explanations = show;
    }

    pub fn toggle_explanations(&mut self) {
        self.show_explanations = !self.show_explanations;
    }

    pub fn show_calculation(&self) -> bool {
        self.show_calculation
    }

    pub fn set_show_calculation(&mut self, show: bool) {
        self.show_calculation = show;
    }

    pub fn toggle_calculation_detail(&mut self) {
        self.show_calculation = !self.show_calculation;
    }

    pub fn show_detail_panel(&self) -> bool {
        self.show_detail_panel
    }

    pub fn set_show_detail_panel(&mut self, show: bool) {
        self.show_detail_panel = show;
    }

    pub fn toggle_detail_panel(&mut self) {
        self.show_detail_panel = !self.show_detail_panel;
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Up,
        Down,
        Next,
        Prev,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Up), Just(Op::Down), Just(Op::Next), Just(Op::Prev)]
    }

    proptest! {
        /// Selections stay in bounds and inside the scroll window.
        #[test]
        fn navigation_keeps_invariants(
            counts in prop::array::uniform10(0usize..30),
            rows in prop::array::uniform10(1usize..8),
            ops in prop::collection::vec(op(), 0..200),
        ) {
            let mut state = PanelState::new();
            for panel in Panel::ALL {
                state.sync_scroll(panel, rows[panel.index()], counts[panel.index()]);
            }
            for op in ops {
                let count = counts[state.focused().index()];
                match op {
                    Op::Up => state.move_up(count),
                    Op::Down => state.move_down(count),
                    Op::Next => state.focus_next(),
                    Op::Prev => state.focus_previous(),
                }
                for panel in Panel::ALL {
                    let count = counts[panel.index()];
                    let selected = state.selected_index(panel);
                    let offset = state.scroll_offset(panel);
                    if count > 0 {
                        prop_assert!(selected < count);
                        prop_assert!(offset <= selected);
                        prop_assert!(selected < offset + rows[panel.index()]);
                    }
                }
            }
        }

        /// focus_next then focus_previous returns to the start.
        #[test]
        fn focus_next_prev_identity(start in 0usize..Panel::COUNT) {
            let mut state = PanelState::new();
            state.focus(Panel::ALL[start]);
            state.focus_next();
            state.focus_previous();
            prop_assert_eq!(state.focused(), Panel::ALL[start]);
        }
    }
}
