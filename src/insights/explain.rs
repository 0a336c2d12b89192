//! Drill-down "calculation proof" for the selected item of a panel.
//!
//! Every explanation is rebuilt from the live dependency graph: the builder
//! walks forward edges, scans for reverse edges, and looks scores up one id
//! at a time. It never reads aggregates beyond the per-issue scores.

use serde::Serialize;
use std::collections::HashSet;

use super::dashboard::PanelEntry;
use super::format::format_metric_value;
use super::panel::Panel;
use super::ranking::{rank_by_score, total_score, ScoredId};
use super::sources::{dependencies, dependents, title_of, DependencyAccessor, ScoreLookup};
use crate::model::Metric;

/// Entries shown per neighbor list before a "+N more" marker.
pub const LIST_CAP: usize = 5;

/// Impact chain steps shown before a continuation marker.
pub const CHAIN_DISPLAY_CAP: usize = 7;

/// An issue id with its title, when the id is in the issue set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRef {
    pub id: String,
    pub title: Option<String>,
}

impl IssueRef {
    pub fn resolve<D: DependencyAccessor + ?Sized>(deps: &D, id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title_of(deps, id).map(str::to_string),
        }
    }

    /// Title, falling back to the raw id for unknown issues.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// A list cut to a display cap, remembering the full length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capped<T> {
    pub shown: Vec<T>,
    pub total: usize,
}

impl<T> Capped<T> {
    pub fn new(mut items: Vec<T>, cap: usize) -> Self {
        let total = items.len();
        items.truncate(cap);
        Self { shown: items, total }
    }

    /// Entries beyond the cap.
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// A neighbor and the score it contributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRef {
    pub issue: IssueRef,
    pub score: f64,
}

/// One member of a cycle; the last one closes the loop back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStep {
    pub issue: IssueRef,
    pub closes_cycle: bool,
}

/// Panel-specific supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Proof {
    /// Who depends on the item and what it depends on.
    Junction {
        dependents: Capped<IssueRef>,
        dependencies: Capped<IssueRef>,
    },
    /// Deepest dependency chain starting at the item.
    ImpactChain { chain: Capped<IssueRef> },
    /// Neighbors ranked by eigenvector score.
    Neighbors { neighbors: Capped<ScoredRef> },
    /// Dependencies ranked by authority score, summed over all of them.
    Authorities {
        authorities: Capped<ScoredRef>,
        authority_sum: f64,
    },
    /// Dependents ranked by hub score, summed over all of them.
    Hubs { hubs: Capped<ScoredRef>, hub_sum: f64 },
    /// Cycle members in stored order.
    Cycle { steps: Vec<CycleStep> },
    /// Triage record details.
    Recommendation { unblocks: usize, reasons: Vec<String> },
    /// The item's own score is all there is.
    Plain,
}

/// The item's headline number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub label: &'static str,
    pub value: f64,
    pub unit: Option<&'static str>,
}

/// Everything the renderer needs to justify one item's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub panel: Panel,
    pub subject: IssueRef,
    pub headline: Option<Headline>,
    pub formula_hint: &'static str,
    pub proof: Proof,
    pub note: Option<&'static str>,
    /// Static usage guidance; always present.
    pub guidance: &'static str,
}

/// Score values for one issue across every metric, plus degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub values: Vec<(Metric, f64)>,
    pub in_degree: usize,
    pub out_degree: usize,
}

impl MetricSummary {
    pub fn for_issue<S: ScoreLookup + ?Sized>(scores: &S, id: &str) -> Self {
        Self {
            values: Metric::ALL
                .iter()
                .map(|&metric| (metric, scores.score(metric, id)))
                .collect(),
            in_degree: scores.in_degree(id),
            out_degree: scores.out_degree(id),
        }
    }

    /// `PageRank: 0.12  Betweenness: 0.300 ...`
    pub fn values_row(&self) -> String {
        self.values
            .iter()
            .map(|(metric, value)| format!("{}: {}", metric.label(), format_metric_value(*value)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn degree_row(&self) -> String {
        format!("In: {} ←  Out: {} →", self.in_degree, self.out_degree)
    }
}

/// Builds explanations against borrowed graph and score sources.
pub struct ExplanationBuilder<'a, D: ?Sized, S: ?Sized> {
    deps: &'a D,
    scores: &'a S,
}

impl<'a, D, S> ExplanationBuilder<'a, D, S>
where
    D: DependencyAccessor + ?Sized,
    S: ScoreLookup + ?Sized,
{
    pub fn new(deps: &'a D, scores: &'a S) -> Self {
        Self { deps, scores }
    }

    /// Explanation for `entry`, shown on `panel`.
    ///
    /// Returns `None` for a cycle with no members.
    pub fn explain(&self, panel: Panel, entry: PanelEntry<'_>) -> Option<Explanation> {
        let id = entry.id()?;
        let info = panel.info();
        let mut explanation = Explanation {
            panel,
            subject: self.subject(entry, id),
            headline: None,
            formula_hint: info.formula_hint,
            proof: Proof::Plain,
            note: None,
            guidance: info.how_to_use,
        };

        match (panel, entry) {
            (Panel::Bottlenecks, _) => {
                explanation.headline = self.headline("Betweenness Score", Metric::Betweenness, id);
                explanation.proof = self.junction(id);
                explanation.note = Some(
                    "This issue lies on many shortest paths between other issues, \
                     making it a critical junction in the dependency graph.",
                );
            }
            (Panel::Keystones, _) => {
                let impact = self.scores.score(Metric::CriticalPath, id);
                explanation.headline = Some(Headline {
                    label: "Impact Depth",
                    value: impact,
                    unit: Some("levels deep"),
                });
                let chain = self.build_impact_chain(id, requested_depth(impact));
                explanation.proof = Proof::ImpactChain {
                    chain: Capped::new(self.resolve_all(&chain), CHAIN_DISPLAY_CAP),
                };
            }
            (Panel::Influencers, _) => {
                explanation.headline =
                    self.headline("Eigenvector Centrality", Metric::Eigenvector, id);
                let neighbors = self.neighbors_with_scores(id, Metric::Eigenvector);
                explanation.proof = Proof::Neighbors {
                    neighbors: Capped::new(self.resolve_scored(neighbors), LIST_CAP),
                };
                explanation.note =
                    Some("Score reflects connections to other well-connected issues.");
            }
            (Panel::Hubs, _) => {
                explanation.headline = self.headline("Hub Score", Metric::Hub, id);
                let authorities = self.with_scores(dependencies(self.deps, id), Metric::Authority);
                let authority_sum = total_score(&authorities);
                explanation.proof = Proof::Authorities {
                    authorities: Capped::new(self.resolve_scored(authorities), LIST_CAP),
                    authority_sum,
                };
            }
            (Panel::Authorities, _) => {
                explanation.headline = self.headline("Authority Score", Metric::Authority, id);
                let hubs = self.with_scores(dependents(self.deps, id), Metric::Hub);
                let hub_sum = total_score(&hubs);
                explanation.proof = Proof::Hubs {
                    hubs: Capped::new(self.resolve_scored(hubs), LIST_CAP),
                    hub_sum,
                };
            }
            (Panel::Cycles, PanelEntry::Cycle(cycle)) => {
                let last = cycle.len().saturating_sub(1);
                explanation.proof = Proof::Cycle {
                    steps: cycle
                        .members()
                        .iter()
                        .enumerate()
                        .map(|(i, member)| CycleStep {
                            issue: IssueRef::resolve(self.deps, member),
                            closes_cycle: i == last,
                        })
                        .collect(),
                };
                explanation.note = Some(
                    "These issues form a circular dependency. \
                     Break the cycle by removing or reversing one edge.",
                );
            }
            (Panel::Priority, PanelEntry::Pick(pick)) => {
                explanation.headline = Some(Headline {
                    label: "Priority Score",
                    value: pick.score,
                    unit: None,
                });
                explanation.proof = Proof::Recommendation {
                    unblocks: pick.unblocks,
                    reasons: pick.reasons.clone(),
                };
            }
            (Panel::Cores, _) => {
                explanation.headline = own_value("Core Number", entry);
            }
            (Panel::Slack, _) => {
                explanation.headline = own_value("Slack", entry);
            }
            (Panel::ArticulationPoints, _) => {
                explanation.note =
                    Some("Removing this issue disconnects part of the dependency graph.");
            }
            (Panel::Cycles | Panel::Priority, _) => {}
        }

        Some(explanation)
    }

    /// Follow the highest-impact dependency from `start`.
    ///
    /// The chain holds at most `max_depth` nodes, never revisits a node, and
    /// stops when a node has no dependencies. Ties go to the dependency
    /// listed first.
    pub fn build_impact_chain(&self, start: &str, max_depth: usize) -> Vec<String> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = start.to_string();

        while chain.len() < max_depth && visited.insert(current.clone()) {
            chain.push(current.clone());

            let mut best: Option<(&str, f64)> = None;
            for dep in dependencies(self.deps, &current) {
                let score = self.scores.score(Metric::CriticalPath, dep);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((dep, score));
                }
            }
            match best {
                Some((next, _)) => current = next.to_string(),
                None => break,
            }
        }
        chain
    }

    /// Dependents then dependencies, de-duplicated, ranked by `metric`.
    pub fn neighbors_with_scores(&self, id: &str, metric: Metric) -> Vec<ScoredId> {
        let mut seen = HashSet::new();
        let neighbors: Vec<&str> = dependents(self.deps, id)
            .into_iter()
            .chain(dependencies(self.deps, id))
            .filter(|neighbor| seen.insert(*neighbor))
            .collect();
        self.with_scores(neighbors, metric)
    }

    /// Pair each id with its `metric` score and rank the result.
    fn with_scores(&self, ids: Vec<&str>, metric: Metric) -> Vec<ScoredId> {
        let scores = self.scores.neighbor_score_map(metric);
        let items = ids
            .into_iter()
            .map(|id| {
                let score = scores.and_then(|map| map.get(id)).copied().unwrap_or(0.0);
                ScoredId::new(id, score)
            })
            .collect();
        rank_by_score(items)
    }

    fn junction(&self, id: &str) -> Proof {
        Proof::Junction {
            dependents: Capped::new(self.resolve_all(&dependents(self.deps, id)), LIST_CAP),
            dependencies: Capped::new(self.resolve_all(&dependencies(self.deps, id)), LIST_CAP),
        }
    }

    fn headline(&self, label: &'static str, metric: Metric, id: &str) -> Option<Headline> {
        Some(Headline {
            label,
            value: self.scores.score(metric, id),
            unit: None,
        })
    }

    fn subject(&self, entry: PanelEntry<'_>, id: &str) -> IssueRef {
        let mut subject = IssueRef::resolve(self.deps, id);
        if let PanelEntry::Pick(pick) = entry {
            if subject.title.is_none() && !pick.title.is_empty() {
                subject.title = Some(pick.title.clone());
            }
        }
        subject
    }

    fn resolve_all<T: AsRef<str>>(&self, ids: &[T]) -> Vec<IssueRef> {
        ids.iter()
            .map(|id| IssueRef::resolve(self.deps, id.as_ref()))
            .collect()
    }

    fn resolve_scored(&self, items: Vec<ScoredId>) -> Vec<ScoredRef> {
        items
            .into_iter()
            .map(|item| ScoredRef {
                issue: IssueRef::resolve(self.deps, &item.id),
                score: item.score,
            })
            .collect()
    }
}

/// Chain depth requested by an impact score, truncated toward zero.
fn requested_depth(impact: f64) -> usize {
    if impact.is_finite() && impact >= 1.0 {
        impact.trunc() as usize
    } else {
        0
    }
}

fn own_value(label: &'static str, entry: PanelEntry<'_>) -> Option<Headline> {
    entry.value().map(|value| Headline {
        label,
        value,
        unit: None,
    })
}
