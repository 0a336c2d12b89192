//! Number and label formatting shared by the text and terminal renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::sources::{title_of, DependencyAccessor};
use crate::model::Cycle;

/// Title characters kept per cycle member.
const CYCLE_TITLE_WIDTH: usize = 15;
/// Raw id characters kept per cycle member without a known issue.
const CYCLE_ID_WIDTH: usize = 12;

/// Metric value as shown in the detail panel and explanations.
pub fn format_metric_value(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else if value >= 1.0 {
        format!("{value:.2}")
    } else if value >= 0.01 {
        format!("{value:.3}")
    } else if value > 0.0 {
        scientific(value)
    } else {
        "0".to_string()
    }
}

/// Value badge of a panel row.
pub fn format_insight_value(value: f64) -> String {
    if value >= 1.0 {
        format!("{value:.1}")
    } else if value >= 0.01 {
        format!("{value:.3}")
    } else {
        scientific(value)
    }
}

/// `1.23e-05` style: signed two-digit exponent.
fn scientific(value: f64) -> String {
    let raw = format!("{value:.2e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Cut `text` to `max_width` display columns, ending in `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One-line rendering of a cycle, `A → B → C → A`, fit to `max_width`.
///
/// Members with a known issue show a short title, others a short raw id.
pub fn cycle_chain<D: DependencyAccessor + ?Sized>(
    cycle: &Cycle,
    deps: &D,
    max_width: usize,
) -> String {
    let mut parts: Vec<String> = cycle
        .members()
        .iter()
        .map(|id| match title_of(deps, id) {
            Some(title) => truncate_with_ellipsis(title, CYCLE_TITLE_WIDTH),
            None => truncate_with_ellipsis(id, CYCLE_ID_WIDTH),
        })
        .collect();
    if let Some(first) = parts.first().cloned() {
        parts.push(first);
    }
    truncate_with_ellipsis(&parts.join(" → "), max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Issue, IssueStore};

    #[test]
    fn test_metric_value_bands() {
        assert_eq!(format_metric_value(250.4), "250");
        assert_eq!(format_metric_value(3.14159), "3.14");
        assert_eq!(format_metric_value(0.0456), "0.046");
        assert_eq!(format_metric_value(0.000123), "1.23e-04");
        assert_eq!(format_metric_value(0.0), "0");
        assert_eq!(format_metric_value(-1.0), "0");
    }

    #[test]
    fn test_insight_value_bands() {
        assert_eq!(format_insight_value(12.345), "12.3");
        assert_eq!(format_insight_value(0.5), "0.500");
        assert_eq!(format_insight_value(0.001), "1.00e-03");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_with_ellipsis("漢字漢字", 5), "漢字…");
    }

    #[test]
    fn test_cycle_chain_closes_on_first_member() {
        let store = IssueStore::new(vec![Issue::new("X", "X")]);
        let cycle: Cycle = ["X", "Y", "Z"].into_iter().collect();
        assert_eq!(cycle_chain(&cycle, &store, 80), "X → Y → Z → X");
    }

    #[test]
    fn test_cycle_chain_shortens_titles_and_ids() {
        let store = IssueStore::new(vec![Issue::new("a", "A very long issue title")]);
        let cycle: Cycle = ["a", "unknown-identifier-42"].into_iter().collect();
        assert_eq!(
            cycle_chain(&cycle, &store, 200),
            "A very long is… → unknown-ide… → A very long is…"
        );
    }

    #[test]
    fn test_cycle_chain_fits_width() {
        let store = IssueStore::default();
        let cycle: Cycle = ["one", "two", "three"].into_iter().collect();
        let chain = cycle_chain(&cycle, &store, 10);
        assert_eq!(chain.width(), 10);
        assert!(chain.ends_with('…'));
    }

    #[test]
    fn test_empty_cycle_chain() {
        let store = IssueStore::default();
        assert_eq!(cycle_chain(&Cycle::default(), &store, 40), "");
    }
}
