//! Line-oriented rendering of an [`Explanation`].
//!
//! Produces styled segments rather than terminal spans so the same layout
//! feeds both the TUI detail panel and plain-text command output.

use super::explain::{Capped, Explanation, IssueRef, Proof, ScoredRef};
use super::format::{format_metric_value, truncate_with_ellipsis};

/// Visual role of a text segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Divider,
    Formula,
    Label,
    Value,
    Item,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub style: TextStyle,
    pub text: String,
}

/// One output line made of styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofLine {
    pub segments: Vec<Segment>,
}

impl ProofLine {
    fn blank() -> Self {
        Self::default()
    }

    fn styled(style: TextStyle, text: impl Into<String>) -> Self {
        Self::default().push(style, text)
    }

    fn push(mut self, style: TextStyle, text: impl Into<String>) -> Self {
        self.segments.push(Segment {
            style,
            text: text.into(),
        });
        self
    }

    /// Segments concatenated without styling.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

pub const PROOF_DIVIDER: &str = "─── CALCULATION PROOF ───";

/// Lay out `explanation` for a column `width` cells wide.
pub fn explanation_lines(explanation: &Explanation, width: usize) -> Vec<ProofLine> {
    let mut lines = vec![
        ProofLine::styled(TextStyle::Divider, PROOF_DIVIDER),
        ProofLine::styled(TextStyle::Formula, explanation.formula_hint),
        ProofLine::blank(),
    ];

    if let Some(headline) = &explanation.headline {
        let mut line = ProofLine::styled(TextStyle::Label, format!("{}: ", headline.label))
            .push(TextStyle::Value, format_metric_value(headline.value));
        if let Some(unit) = headline.unit {
            line = line.push(TextStyle::Label, format!(" {unit}"));
        }
        lines.push(line);
        lines.push(ProofLine::blank());
    }

    match &explanation.proof {
        Proof::Junction {
            dependents,
            dependencies,
        } => {
            id_list(&mut lines, "Issues depending on this", "↓", dependents, width);
            id_list(&mut lines, "This depends on", "↑", dependencies, width);
        }
        Proof::ImpactChain { chain } => {
            if !chain.is_empty() {
                lines.push(ProofLine::styled(TextStyle::Label, "Dependency chain:"));
            }
            for (depth, step) in chain.shown.iter().enumerate() {
                let indent = "  ".repeat(depth);
                let title_width = width.saturating_sub(2 * depth + 3).max(10);
                let style = if depth == 0 {
                    TextStyle::Value
                } else {
                    TextStyle::Item
                };
                lines.push(ProofLine::styled(
                    style,
                    format!("{indent}└─ {}", truncate_with_ellipsis(step.label(), title_width)),
                ));
            }
            if chain.hidden() > 0 {
                let indent = "  ".repeat(chain.shown.len().saturating_sub(1));
                lines.push(ProofLine::styled(
                    TextStyle::Muted,
                    format!("{indent}   ... chain continues"),
                ));
            }
        }
        Proof::Neighbors { neighbors } => {
            if !neighbors.is_empty() {
                lines.push(ProofLine::styled(
                    TextStyle::Label,
                    "Connected to influential issues:",
                ));
            }
            scored_list(&mut lines, "•", "EV", neighbors, width);
            if neighbors.hidden() > 0 {
                lines.push(ProofLine::styled(
                    TextStyle::Muted,
                    format!("  ... +{} more connections", neighbors.hidden()),
                ));
            }
        }
        Proof::Authorities {
            authorities,
            authority_sum,
        } => {
            if !authorities.is_empty() {
                lines.push(ProofLine::styled(
                    TextStyle::Label,
                    "Depends on these authorities:",
                ));
                scored_list(&mut lines, "→", "Auth", authorities, width);
                more_marker(&mut lines, authorities.hidden());
                lines.push(ProofLine::blank());
                lines.push(ProofLine::styled(
                    TextStyle::Muted,
                    format!(
                        "Sum of {} authority scores: {}",
                        authorities.total,
                        format_metric_value(*authority_sum)
                    ),
                ));
            }
        }
        Proof::Hubs { hubs, hub_sum } => {
            if !hubs.is_empty() {
                lines.push(ProofLine::styled(TextStyle::Label, "Hubs that depend on this:"));
                scored_list(&mut lines, "←", "Hub", hubs, width);
                more_marker(&mut lines, hubs.hidden());
                lines.push(ProofLine::blank());
                lines.push(ProofLine::styled(
                    TextStyle::Muted,
                    format!(
                        "Sum of {} hub scores: {}",
                        hubs.total,
                        format_metric_value(*hub_sum)
                    ),
                ));
            }
        }
        Proof::Cycle { steps } => {
            lines.push(ProofLine::styled(
                TextStyle::Label,
                format!("Cycle with {} issues:", steps.len()),
            ));
            for step in steps {
                let arrow = if step.closes_cycle { "↺" } else { "→" };
                lines.push(ProofLine::styled(
                    TextStyle::Item,
                    format!(
                        "  {arrow} {}",
                        truncate_with_ellipsis(step.issue.label(), width.saturating_sub(6))
                    ),
                ));
            }
        }
        Proof::Recommendation { unblocks, reasons } => {
            lines.push(
                ProofLine::styled(TextStyle::Label, "Unblocks: ")
                    .push(TextStyle::Value, unblocks.to_string()),
            );
            for reason in reasons {
                lines.push(ProofLine::styled(TextStyle::Item, format!("  • {reason}")));
            }
        }
        Proof::Plain => {}
    }

    if let Some(note) = explanation.note {
        lines.push(ProofLine::blank());
        lines.push(ProofLine::styled(TextStyle::Muted, note));
    }
    lines.push(ProofLine::blank());
    lines.push(ProofLine::styled(TextStyle::Muted, explanation.guidance));
    lines
}

fn id_list(
    lines: &mut Vec<ProofLine>,
    label: &str,
    marker: &str,
    ids: &Capped<IssueRef>,
    width: usize,
) {
    if ids.is_empty() {
        return;
    }
    lines.push(ProofLine::styled(
        TextStyle::Label,
        format!("{label} ({}):", ids.total),
    ));
    for issue in &ids.shown {
        lines.push(ProofLine::styled(
            TextStyle::Item,
            format!(
                "  {marker} {}",
                truncate_with_ellipsis(issue.label(), width.saturating_sub(4))
            ),
        ));
    }
    more_marker(lines, ids.hidden());
}

fn scored_list(
    lines: &mut Vec<ProofLine>,
    marker: &str,
    score_label: &str,
    items: &Capped<ScoredRef>,
    width: usize,
) {
    for item in &items.shown {
        let title = truncate_with_ellipsis(item.issue.label(), width.saturating_sub(15));
        lines.push(
            ProofLine::styled(TextStyle::Item, format!("  {marker} {title} ")).push(
                TextStyle::Muted,
                format!("({score_label}: {})", format_metric_value(item.score)),
            ),
        );
    }
}

fn more_marker(lines: &mut Vec<ProofLine>, hidden: usize) {
    if hidden > 0 {
        lines.push(ProofLine::styled(
            TextStyle::Muted,
            format!("  ... +{hidden} more"),
        ));
    }
}

/// Plain-text rendering, one string per line.
pub fn explanation_text(explanation: &Explanation, width: usize) -> String {
    explanation_lines(explanation, width)
        .iter()
        .map(ProofLine::plain)
        .collect::<Vec<_>>()
        .join("\n")
}
