//! Scroll window arithmetic for panel lists.
//!
//! The window only moves when the selection leaves it, and then only as far
//! as needed to bring the selection back to the nearest edge.

use std::ops::Range;

/// Clamps selection index to valid range (pure).
pub fn clamp_selection(index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        index.min(item_count - 1)
    }
}

/// New scroll offset keeping `selected` inside a window of `visible_rows`.
///
/// A zero-row viewport is treated as one row.
pub fn adjust_scroll_offset(selected: usize, scroll_offset: usize, visible_rows: usize) -> usize {
    let rows = visible_rows.max(1);
    if selected >= scroll_offset + rows {
        selected + 1 - rows
    } else if selected < scroll_offset {
        selected
    } else {
        scroll_offset
    }
}

/// Calculates visible range for scrolling (pure).
pub fn calculate_visible_range(
    scroll_offset: usize,
    visible_rows: usize,
    total_items: usize,
) -> Range<usize> {
    let start = scroll_offset.min(total_items);
    let end = (scroll_offset + visible_rows).min(total_items);
    start..end
}

/// `current/total` position text, only when the list overflows the window.
pub fn scroll_indicator(selected: usize, total_items: usize, visible_rows: usize) -> Option<String> {
    (total_items > visible_rows).then(|| format!("{}/{}", selected + 1, total_items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_selection_empty() {
        assert_eq!(clamp_selection(5, 0), 0);
    }

    #[test]
    fn test_clamp_selection_exceeds_bounds() {
        assert_eq!(clamp_selection(15, 10), 9);
        assert_eq!(clamp_selection(3, 10), 3);
    }

    #[test]
    fn test_offset_unchanged_inside_window() {
        assert_eq!(adjust_scroll_offset(5, 3, 4), 3);
        assert_eq!(adjust_scroll_offset(3, 3, 4), 3);
        assert_eq!(adjust_scroll_offset(6, 3, 4), 3);
    }

    #[test]
    fn test_offset_advances_to_bottom_edge() {
        assert_eq!(adjust_scroll_offset(7, 3, 4), 4);
        assert_eq!(adjust_scroll_offset(20, 0, 5), 16);
    }

    #[test]
    fn test_offset_retreats_to_selection() {
        assert_eq!(adjust_scroll_offset(1, 3, 4), 1);
        assert_eq!(adjust_scroll_offset(0, 9, 4), 0);
    }

    #[test]
    fn test_zero_rows_treated_as_one() {
        assert_eq!(adjust_scroll_offset(4, 0, 0), 4);
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(calculate_visible_range(0, 10, 100), 0..10);
        assert_eq!(calculate_visible_range(95, 10, 100), 95..100);
        assert_eq!(calculate_visible_range(0, 10, 0), 0..0);
        assert_eq!(calculate_visible_range(12, 5, 3), 3..3);
    }

    #[test]
    fn test_indicator_only_on_overflow() {
        assert_eq!(scroll_indicator(0, 5, 5), None);
        assert_eq!(scroll_indicator(2, 12, 5), Some("3/12".to_string()));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The selection is always inside the adjusted window.
        #[test]
        fn selection_inside_window(
            selected in 0usize..500,
            offset in 0usize..500,
            rows in 1usize..50,
        ) {
            let new_offset = adjust_scroll_offset(selected, offset, rows);
            prop_assert!(new_offset <= selected);
            prop_assert!(selected < new_offset + rows);
        }

        /// Minimal movement: a selection already visible never scrolls.
        #[test]
        fn visible_selection_does_not_move(
            offset in 0usize..500,
            rows in 1usize..50,
            delta in 0usize..50,
        ) {
            let selected = offset + delta % rows;
            prop_assert_eq!(adjust_scroll_offset(selected, offset, rows), offset);
        }

        /// Adjusting twice is the same as adjusting once.
        #[test]
        fn adjust_is_idempotent(
            selected in 0usize..500,
            offset in 0usize..500,
            rows in 1usize..50,
        ) {
            let once = adjust_scroll_offset(selected, offset, rows);
            prop_assert_eq!(adjust_scroll_offset(selected, once, rows), once);
        }
    }
}
