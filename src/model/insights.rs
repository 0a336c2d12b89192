//! Panel-backing collections produced by the upstream graph analysis.
//!
//! Every list is kept in the order the analyzer emitted it (most significant
//! first). Nothing here is re-sorted; a recompute replaces the whole value.

use serde::{Deserialize, Serialize};

/// A scored issue reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightItem {
    pub id: String,
    #[serde(default)]
    pub value: f64,
}

impl InsightItem {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// A dependency loop. The first member is not repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cycle(pub Vec<String>);

impl Cycle {
    pub fn members(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Cycle {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Cycle(iter.into_iter().map(Into::into).collect())
    }
}

/// A triage recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPick {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub score: f64,
    /// How many items completing this one unblocks.
    #[serde(default, alias = "unblocks_count")]
    pub unblocks: usize,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Ranked lists backing the metric panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Insights {
    pub bottlenecks: Vec<InsightItem>,
    pub keystones: Vec<InsightItem>,
    pub influencers: Vec<InsightItem>,
    pub hubs: Vec<InsightItem>,
    pub authorities: Vec<InsightItem>,
    pub cores: Vec<InsightItem>,
    /// Articulation vertices carry no score.
    pub articulation: Vec<String>,
    pub slack: Vec<InsightItem>,
    pub cycles: Vec<Cycle>,
}
