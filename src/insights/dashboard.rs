//! The dashboard core: panel collections plus navigation state.
//!
//! `item_count` is the single source of truth for every bounds check, and
//! the only place that knows which collection backs which panel.

use serde::Serialize;

use super::explain::{Explanation, ExplanationBuilder, MetricSummary};
use super::panel::{MetricInfo, Panel, PanelMap};
use super::scroll::scroll_indicator;
use super::skip::{resolve_skip_state, SkipState};
use super::sources::{DependencyAccessor, ScoreLookup};
use super::state::PanelState;
use crate::model::{Cycle, InsightItem, Insights, TopPick};

/// One addressable entry of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEntry<'a> {
    Item(&'a InsightItem),
    CutPoint(&'a str),
    Cycle(&'a Cycle),
    Pick(&'a TopPick),
}

impl<'a> PanelEntry<'a> {
    /// Issue the entry points at; a cycle points at its first member.
    pub fn id(self) -> Option<&'a str> {
        match self {
            PanelEntry::Item(item) => Some(&item.id),
            PanelEntry::CutPoint(id) => Some(id),
            PanelEntry::Cycle(cycle) => cycle.first(),
            PanelEntry::Pick(pick) => Some(&pick.id),
        }
    }

    /// The entry's own score, when it has one.
    pub fn value(self) -> Option<f64> {
        match self {
            PanelEntry::Item(item) => Some(item.value),
            PanelEntry::Pick(pick) => Some(pick.score),
            PanelEntry::CutPoint(_) | PanelEntry::Cycle(_) => None,
        }
    }
}

/// A visible row of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRow<'a> {
    pub index: usize,
    pub entry: PanelEntry<'a>,
    /// Only the focused panel marks a selected row.
    pub selected: bool,
}

/// What a panel body shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelStatus {
    Skipped { reason: String, hint: &'static str },
    /// Nothing to list. For cycles this is the healthy state.
    Empty { message: &'static str },
    Populated,
}

/// Everything a renderer needs to draw one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<'a> {
    pub panel: Panel,
    pub info: &'static MetricInfo,
    pub focused: bool,
    pub status: PanelStatus,
    pub item_count: usize,
    pub selected_index: usize,
    pub rows: Vec<PanelRow<'a>>,
    /// `current/total`, present when the list overflows its window.
    pub scroll_indicator: Option<String>,
}

/// Body text for a panel with nothing to list.
pub fn empty_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Cycles => "✓ No cycles detected",
        Panel::Priority => "No priority recommendations available.",
        Panel::ArticulationPoints => "No articulation points",
        Panel::Bottlenecks
        | Panel::Keystones
        | Panel::Influencers
        | Panel::Hubs
        | Panel::Authorities
        | Panel::Cores
        | Panel::Slack => "No items",
    }
}

/// Panel collections and the navigation state over them.
#[derive(Debug, Clone, Default)]
pub struct InsightsDashboard {
    insights: Insights,
    top_picks: Vec<TopPick>,
    state: PanelState,
}

impl InsightsDashboard {
    pub fn new(insights: Insights, top_picks: Vec<TopPick>) -> Self {
        Self {
            insights,
            top_picks,
            state: PanelState::new(),
        }
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    pub fn top_picks(&self) -> &[TopPick] {
        &self.top_picks
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn focused(&self) -> Panel {
        self.state.focused()
    }

    /// Number of addressable entries in `panel`.
    pub fn item_count(&self, panel: Panel) -> usize {
        match panel {
            Panel::Bottlenecks => self.insights.bottlenecks.len(),
            Panel::Keystones => self.insights.keystones.len(),
            Panel::Influencers => self.insights.influencers.len(),
            Panel::Hubs => self.insights.hubs.len(),
            Panel::Authorities => self.insights.authorities.len(),
            Panel::Cores => self.insights.cores.len(),
            Panel::ArticulationPoints => self.insights.articulation.len(),
            Panel::Slack => self.insights.slack.len(),
            Panel::Cycles => self.insights.cycles.len(),
            Panel::Priority => self.top_picks.len(),
        }
    }

    pub fn panel_counts(&self) -> PanelMap<usize> {
        let mut counts = PanelMap::default();
        for panel in Panel::ALL {
            counts[panel] = self.item_count(panel);
        }
        counts
    }

    /// Entry at `index` of `panel`, if in range.
    pub fn entry(&self, panel: Panel, index: usize) -> Option<PanelEntry<'_>> {
        let items = match panel {
            Panel::Bottlenecks => &self.insights.bottlenecks,
            Panel::Keystones => &self.insights.keystones,
            Panel::Influencers => &self.insights.influencers,
            Panel::Hubs => &self.insights.hubs,
            Panel::Authorities => &self.insights.authorities,
            Panel::Cores => &self.insights.cores,
            Panel::Slack => &self.insights.slack,
            Panel::ArticulationPoints => {
                return self
                    .insights
                    .articulation
                    .get(index)
                    .map(|id| PanelEntry::CutPoint(id));
            }
            Panel::Cycles => return self.insights.cycles.get(index).map(PanelEntry::Cycle),
            Panel::Priority => return self.top_picks.get(index).map(PanelEntry::Pick),
        };
        items.get(index).map(PanelEntry::Item)
    }

    pub fn selected_entry(&self, panel: Panel) -> Option<PanelEntry<'_>> {
        self.entry(panel, self.state.selected_index(panel))
    }

    /// Issue the user is pointing at in `panel`, `None` when nothing is selected.
    pub fn selected_id(&self, panel: Panel) -> Option<&str> {
        self.selected_entry(panel).and_then(PanelEntry::id)
    }

    pub fn focus(&mut self, panel: Panel) {
        self.state.focus(panel);
    }

    pub fn focus_next(&mut self) {
        self.state.focus_next();
    }

    pub fn focus_previous(&mut self) {
        self.state.focus_previous();
    }

    pub fn move_selection_up(&mut self) {
        let count = self.item_count(self.focused());
        self.state.move_up(count);
    }

    pub fn move_selection_down(&mut self) {
        let count = self.item_count(self.focused());
        self.state.move_down(count);
    }

    pub fn toggle_explanations(&mut self) {
        self.state.toggle_explanations();
    }

    pub fn toggle_calculation_detail(&mut self) {
        self.state.toggle_calculation_detail();
    }

    pub fn toggle_detail_panel(&mut self) {
        self.state.toggle_detail_panel();
    }

    pub fn set_show_explanations(&mut self, show: bool) {
        self.state.set_show_explanations(show);
    }

    pub fn set_show_calculation(&mut self, show: bool) {
        self.state.set_show_calculation(show);
    }

    pub fn set_show_detail_panel(&mut self, show: bool) {
        self.state.set_show_detail_panel(show);
    }

    pub fn scroll_detail_down(&mut self) {
        self.state.scroll_detail_down();
    }

    pub fn scroll_detail_up(&mut self) {
        self.state.scroll_detail_up();
    }

    /// Replace every collection and re-clamp navigation state.
    pub fn refresh(&mut self, insights: Insights, top_picks: Vec<TopPick>) {
        self.insights = insights;
        self.top_picks = top_picks;
        let counts = self.panel_counts();
        self.state.reclamp(&counts);
        tracing::debug!(
            items = counts.iter().map(|(_, n)| *n).sum::<usize>(),
            "dashboard refreshed"
        );
    }

    /// Point `panel`'s selection at the first entry for `id`.
    ///
    /// Returns false and leaves the selection alone when no entry matches.
    pub fn select_id(&mut self, panel: Panel, id: &str) -> bool {
        let count = self.item_count(panel);
        let found = (0..count).find(|&index| {
            self.entry(panel, index).and_then(PanelEntry::id) == Some(id)
        });
        match found {
            Some(index) => {
                self.state.select(panel, index, count);
                true
            }
            None => false,
        }
    }

    /// Select entry `index` of `panel`, clamped.
    pub fn select_index(&mut self, panel: Panel, index: usize) {
        let count = self.item_count(panel);
        self.state.select(panel, index, count);
    }

    /// Render model for `panel` in a window of `visible_rows`.
    ///
    /// Skipped panels are reported without consulting their items.
    pub fn panel_view<S: ScoreLookup + ?Sized>(
        &mut self,
        panel: Panel,
        visible_rows: usize,
        scores: &S,
    ) -> PanelView<'_> {
        let skip = resolve_skip_state(panel, scores);
        let count = self.item_count(panel);
        let focused = self.state.focused() == panel;

        let (status, range) = match skip {
            SkipState::Skipped { reason, hint } => (PanelStatus::Skipped { reason, hint }, 0..0),
            SkipState::Available if count == 0 => (
                PanelStatus::Empty {
                    message: empty_message(panel),
                },
                0..0,
            ),
            SkipState::Available => (
                PanelStatus::Populated,
                self.state.sync_scroll(panel, visible_rows, count),
            ),
        };

        let selected_index = self.state.selected_index(panel);
        let rows = range
            .filter_map(|index| {
                self.entry(panel, index).map(|entry| PanelRow {
                    index,
                    entry,
                    selected: focused && index == selected_index,
                })
            })
            .collect();
        let scroll_indicator = match status {
            PanelStatus::Populated => scroll_indicator(selected_index, count, visible_rows.max(1)),
            _ => None,
        };

        PanelView {
            panel,
            info: panel.info(),
            focused,
            status,
            item_count: count,
            selected_index,
            rows,
            scroll_indicator,
        }
    }

    /// Drill-down explanation for the focused panel's selection.
    pub fn explain_selection<D, S>(&self, deps: &D, scores: &S) -> Option<Explanation>
    where
        D: DependencyAccessor + ?Sized,
        S: ScoreLookup + ?Sized,
    {
        self.explain(self.focused(), deps, scores)
    }

    /// Drill-down explanation for `panel`'s selection.
    ///
    /// `None` when the panel is skipped or has no selection.
    pub fn explain<D, S>(&self, panel: Panel, deps: &D, scores: &S) -> Option<Explanation>
    where
        D: DependencyAccessor + ?Sized,
        S: ScoreLookup + ?Sized,
    {
        if resolve_skip_state(panel, scores).is_skipped() {
            return None;
        }
        let entry = self.selected_entry(panel)?;
        ExplanationBuilder::new(deps, scores).explain(panel, entry)
    }

    /// Generic metric values for the focused panel's selected issue.
    pub fn selected_metrics<S: ScoreLookup + ?Sized>(&self, scores: &S) -> Option<MetricSummary> {
        self.selected_id(self.focused())
            .map(|id| MetricSummary::for_issue(scores, id))
    }
}
