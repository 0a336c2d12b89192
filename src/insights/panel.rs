//! The ten dashboard panels and their static descriptions.
//!
//! `Panel` is a closed, ordered set. Its order is the focus-cycling order and
//! the layout order of the grid. Per-panel state lives in a [`PanelMap`], a
//! fixed array indexed by panel, so every panel always has a slot.

use serde::Serialize;
use std::ops::{Index, IndexMut};

use crate::model::MetricFamily;

/// One display slot of the insights dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Bottlenecks,
    Keystones,
    Influencers,
    Hubs,
    Authorities,
    Cores,
    #[value(alias = "articulation", alias = "cut-points")]
    ArticulationPoints,
    Slack,
    Cycles,
    Priority,
}

impl Panel {
    /// Total number of panels.
    pub const COUNT: usize = 10;

    /// Panels in focus order.
    pub const ALL: [Panel; Panel::COUNT] = [
        Panel::Bottlenecks,
        Panel::Keystones,
        Panel::Influencers,
        Panel::Hubs,
        Panel::Authorities,
        Panel::Cores,
        Panel::ArticulationPoints,
        Panel::Slack,
        Panel::Cycles,
        Panel::Priority,
    ];

    /// Next panel, wrapping from Priority back to Bottlenecks.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Panel::Bottlenecks => Panel::Keystones,
            Panel::Keystones => Panel::Influencers,
            Panel::Influencers => Panel::Hubs,
            Panel::Hubs => Panel::Authorities,
            Panel::Authorities => Panel::Cores,
            Panel::Cores => Panel::ArticulationPoints,
            Panel::ArticulationPoints => Panel::Slack,
            Panel::Slack => Panel::Cycles,
            Panel::Cycles => Panel::Priority,
            Panel::Priority => Panel::Bottlenecks,
        }
    }

    /// Previous panel, wrapping from Bottlenecks back to Priority.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Panel::Bottlenecks => Panel::Priority,
            Panel::Keystones => Panel::Bottlenecks,
            Panel::Influencers => Panel::Keystones,
            Panel::Hubs => Panel::Influencers,
            Panel::Authorities => Panel::Hubs,
            Panel::Cores => Panel::Authorities,
            Panel::ArticulationPoints => Panel::Cores,
            Panel::Slack => Panel::ArticulationPoints,
            Panel::Cycles => Panel::Slack,
            Panel::Priority => Panel::Cycles,
        }
    }

    /// 0-based position in focus order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Panel::Bottlenecks => 0,
            Panel::Keystones => 1,
            Panel::Influencers => 2,
            Panel::Hubs => 3,
            Panel::Authorities => 4,
            Panel::Cores => 5,
            Panel::ArticulationPoints => 6,
            Panel::Slack => 7,
            Panel::Cycles => 8,
            Panel::Priority => 9,
        }
    }

    /// Metric family whose run status decides whether the panel is skipped.
    ///
    /// Cores, articulation points and priority have no owning family and are
    /// never skipped.
    pub fn metric_family(self) -> Option<MetricFamily> {
        match self {
            Panel::Bottlenecks => Some(MetricFamily::Betweenness),
            Panel::Keystones | Panel::Slack => Some(MetricFamily::CriticalPath),
            Panel::Influencers => Some(MetricFamily::Eigenvector),
            Panel::Hubs | Panel::Authorities => Some(MetricFamily::Hits),
            Panel::Cycles => Some(MetricFamily::Cycles),
            Panel::Cores | Panel::ArticulationPoints | Panel::Priority => None,
        }
    }

    /// Static descriptive metadata for the panel.
    pub fn info(self) -> &'static MetricInfo {
        match self {
            Panel::Bottlenecks => &BOTTLENECKS,
            Panel::Keystones => &KEYSTONES,
            Panel::Influencers => &INFLUENCERS,
            Panel::Hubs => &HUBS,
            Panel::Authorities => &AUTHORITIES,
            Panel::Cores => &CORES,
            Panel::ArticulationPoints => &ARTICULATION,
            Panel::Slack => &SLACK,
            Panel::Cycles => &CYCLES,
            Panel::Priority => &PRIORITY,
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }
}

/// Descriptive text shown alongside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub what_is: &'static str,
    pub why_useful: &'static str,
    pub how_to_use: &'static str,
    pub formula_hint: &'static str,
}

const BOTTLENECKS: MetricInfo = MetricInfo {
    icon: "🚧",
    title: "Bottlenecks",
    short_desc: "Betweenness Centrality",
    what_is: "Measures how often an issue lies on shortest paths between other issues.",
    why_useful: "High-scoring issues are critical junctions. Delays here ripple across the project.",
    how_to_use: "Prioritize these to unblock parallel workstreams. Consider breaking them into smaller pieces.",
    formula_hint: "BW(v) = Σ (σst(v) / σst) for all s≠v≠t",
};

const KEYSTONES: MetricInfo = MetricInfo {
    icon: "🏛",
    title: "Keystones",
    short_desc: "Impact Depth",
    what_is: "Measures how deep in the dependency chain an issue sits (downstream chain length).",
    why_useful: "Keystones are foundational. Everything above them depends on their completion.",
    how_to_use: "Complete these first. Blocking a keystone blocks the entire chain above it.",
    formula_hint: "Impact(v) = 1 + max(Impact(u)) for all u that depend on v",
};

const INFLUENCERS: MetricInfo = MetricInfo {
    icon: "🌐",
    title: "Influencers",
    short_desc: "Eigenvector Centrality",
    what_is: "Scores issues by their connections to other well-connected issues.",
    why_useful: "Influencers are connected to important issues. Changes here have wide-reaching effects.",
    how_to_use: "Review these carefully before changes. They're central to the project structure.",
    formula_hint: "EV(v) = (1/λ) × Σ A[v,u] × EV(u)",
};

const HUBS: MetricInfo = MetricInfo {
    icon: "🛰",
    title: "Hubs",
    short_desc: "HITS Hub Score",
    what_is: "Issues that depend on many important authorities (aggregators).",
    why_useful: "Hubs collect dependencies. They often represent high-level features or epics.",
    how_to_use: "Track these for project milestones. Their completion signals major progress.",
    formula_hint: "Hub(v) = Σ Authority(u) for all u where v→u",
};

const AUTHORITIES: MetricInfo = MetricInfo {
    icon: "📚",
    title: "Authorities",
    short_desc: "HITS Authority Score",
    what_is: "Issues that are depended upon by many important hubs (providers).",
    why_useful: "Authorities are foundational services/components that many features need.",
    how_to_use: "Stabilize these early. Breaking an authority breaks many dependent hubs.",
    formula_hint: "Auth(v) = Σ Hub(u) for all u where u→v",
};

const CORES: MetricInfo = MetricInfo {
    icon: "🧠",
    title: "Cores",
    short_desc: "k-core Cohesion",
    what_is: "Highest k-core numbers (nodes embedded in dense subgraphs).",
    why_useful: "High-core nodes sit in tightly knit clusters; changing them can ripple locally.",
    how_to_use: "Use for resilience checks; prioritize when breaking apart tightly coupled areas.",
    formula_hint: "Max k such that node remains in k-core after peeling",
};

const ARTICULATION: MetricInfo = MetricInfo {
    icon: "🪢",
    title: "Cut Points",
    short_desc: "Articulation Vertices",
    what_is: "Nodes whose removal disconnects the undirected graph.",
    why_useful: "Single points of failure. Instability here can isolate workstreams.",
    how_to_use: "Harden or split these nodes; avoid piling more dependencies onto them.",
    formula_hint: "Tarjan articulation detection on undirected view",
};

const SLACK: MetricInfo = MetricInfo {
    icon: "⏳",
    title: "Slack",
    short_desc: "Longest-path slack",
    what_is: "Distance from the critical chain (0 = on critical path; higher = parallel-friendly).",
    why_useful: "Zero-slack tasks are schedule-critical; high-slack tasks can fill gaps without blocking.",
    how_to_use: "Schedule zero-slack tasks early; slot high-slack tasks when waiting on blockers.",
    formula_hint: "Slack(v) = max_path_len - dist_start(v) - dist_end(v)",
};

const CYCLES: MetricInfo = MetricInfo {
    icon: "🔄",
    title: "Cycles",
    short_desc: "Circular Dependencies",
    what_is: "Groups of issues that form dependency loops (A→B→C→A).",
    why_useful: "Cycles indicate structural problems. They can't be resolved in sequence.",
    how_to_use: "Break cycles by removing or reversing a dependency. Refactor to decouple.",
    formula_hint: "Detected via Tarjan's SCC algorithm",
};

const PRIORITY: MetricInfo = MetricInfo {
    icon: "🎯",
    title: "Priority",
    short_desc: "Triage Recommendations",
    what_is: "Recommendations combining multiple graph signals into actionable picks.",
    why_useful: "Provides the single best answer for 'what should I work on next?'",
    how_to_use: "Work items top to bottom. High scores = high impact. Check unblocks count.",
    formula_hint: "Score = Σ(PageRank + Betweenness + BlockerRatio + Staleness + Priority + TimeToImpact + Urgency + Risk)",
};

/// Fixed-size per-panel storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMap<T>([T; Panel::COUNT]);

impl<T: Copy> PanelMap<T> {
    /// Every slot set to `value`.
    pub fn filled(value: T) -> Self {
        PanelMap([value; Panel::COUNT])
    }
}

impl<T: Copy + Default> Default for PanelMap<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> PanelMap<T> {
    /// Iterate `(panel, value)` in focus order.
    pub fn iter(&self) -> impl Iterator<Item = (Panel, &T)> {
        Panel::ALL.iter().copied().zip(self.0.iter())
    }
}

impl<T> Index<Panel> for PanelMap<T> {
    type Output = T;

    fn index(&self, panel: Panel) -> &T {
        &self.0[panel.index()]
    }
}

impl<T> IndexMut<Panel> for PanelMap<T> {
    fn index_mut(&mut self, panel: Panel) -> &mut T {
        &mut self.0[panel.index()]
    }
}
