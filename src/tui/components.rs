//! Shared rendering pieces for panels and the detail view.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::insights::ProofLine;

/// Add lowercase section header with muted color
pub fn add_section_header(lines: &mut Vec<Line<'static>>, title: &str, theme: &Theme) {
    lines.push(Line::from(vec![Span::styled(
        title.to_string(),
        theme.muted_style(),
    )]));
}

/// Add label-value pair with dotted leader connection
///
/// ```text
/// status ···················· open
/// priority ·················· 1
/// ```
pub fn add_label_value(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: String,
    theme: &Theme,
    width: u16,
) {
    const INDENT: usize = 2;
    const MIN_DOTS: usize = 3;

    let label_with_indent = format!("{}{}", " ".repeat(INDENT), label);
    let total_content_len = label_with_indent.width() + 1 + value.width() + 1;
    let dots_needed = (width as usize)
        .saturating_sub(total_content_len)
        .max(MIN_DOTS);

    lines.push(Line::from(vec![
        Span::raw(label_with_indent),
        Span::raw(" "),
        Span::styled("·".repeat(dots_needed), theme.muted_style()),
        Span::raw(" "),
        Span::styled(value, Style::default().fg(theme.focus)),
    ]));
}

/// Add an indented block of free text, skipped when empty
pub fn add_text_block(lines: &mut Vec<Line<'static>>, title: &str, text: &str, theme: &Theme) {
    if text.trim().is_empty() {
        return;
    }
    add_section_header(lines, title, theme);
    for line in text.lines() {
        lines.push(Line::from(format!("  {line}")));
    }
    add_blank_line(lines);
}

/// Add blank line separator
pub fn add_blank_line(lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(""));
}

/// Convert a styled proof line into a terminal line.
pub fn proof_line(line: &ProofLine, theme: &Theme) -> Line<'static> {
    Line::from(
        line.segments
            .iter()
            .map(|segment| Span::styled(segment.text.clone(), theme.segment_style(segment.style)))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{Segment, TextStyle};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_label_value_fills_width() {
        let theme = Theme::default();
        let mut lines = Vec::new();
        add_label_value(&mut lines, "status", "open".to_string(), &theme, 30);
        assert_eq!(plain(&lines[0]).width(), 30);
        assert!(plain(&lines[0]).ends_with(" open"));
    }

    #[test]
    fn test_label_value_keeps_minimum_dots() {
        let theme = Theme::default();
        let mut lines = Vec::new();
        add_label_value(&mut lines, "assignee", "someone-with-a-long-name".to_string(), &theme, 10);
        assert!(plain(&lines[0]).contains("···"));
    }

    #[test]
    fn test_empty_text_block_is_skipped() {
        let theme = Theme::default();
        let mut lines = Vec::new();
        add_text_block(&mut lines, "design", "  ", &theme);
        assert!(lines.is_empty());
        add_text_block(&mut lines, "design", "one\ntwo", &theme);
        assert_eq!(lines.len(), 4);
        assert_eq!(plain(&lines[2]), "  two");
    }

    #[test]
    fn test_proof_line_keeps_segments() {
        let theme = Theme::default();
        let line = ProofLine {
            segments: vec![
                Segment {
                    style: TextStyle::Label,
                    text: "Betweenness: ".to_string(),
                },
                Segment {
                    style: TextStyle::Value,
                    text: "0.500".to_string(),
                },
            ],
        };
        let rendered = proof_line(&line, &theme);
        assert_eq!(rendered.spans.len(), 2);
        assert_eq!(plain(&rendered), line.plain());
    }
}
