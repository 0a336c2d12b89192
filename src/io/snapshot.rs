//! Analysis snapshot: issues, ranked insights, scores and triage picks.
//!
//! The snapshot is produced by the upstream graph analysis. Every section
//! is optional on the wire and defaults to empty.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::issues::load_issues_jsonl;
use super::strip_bom;
use crate::errors::DepmapError;
use crate::model::{GraphStats, Insights, Issue, IssueStore, TopPick};
use crate::observability::{set_phase, SessionPhase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Snapshot {
    pub issues: Vec<Issue>,
    pub insights: Insights,
    pub stats: GraphStats,
    pub top_picks: Vec<TopPick>,
}

impl Snapshot {
    /// Split into the dashboard inputs.
    pub fn into_parts(self) -> (IssueStore, Insights, GraphStats, Vec<TopPick>) {
        (
            IssueStore::new(self.issues),
            self.insights,
            self.stats,
            self.top_picks,
        )
    }
}

pub fn parse_snapshot(text: &str) -> serde_json::Result<Snapshot> {
    serde_json::from_str(strip_bom(text))
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, DepmapError> {
    let text = std::fs::read_to_string(path).map_err(|e| DepmapError::io(path, e))?;
    let snapshot = parse_snapshot(&text).map_err(|e| {
        let line = e.line();
        DepmapError::parse(path, (line > 0).then_some(line), e)
    })?;
    tracing::info!(
        path = %path.display(),
        issues = snapshot.issues.len(),
        cycles = snapshot.insights.cycles.len(),
        picks = snapshot.top_picks.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

/// Everything a dashboard session reads, loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub store: IssueStore,
    pub insights: Insights,
    pub stats: GraphStats,
    pub top_picks: Vec<TopPick>,
}

/// Load a snapshot, optionally taking issue records from a JSONL file.
pub fn load_inputs(snapshot: &Path, issues: Option<&Path>) -> Result<DashboardInputs, DepmapError> {
    let loaded = {
        let _phase = set_phase(SessionPhase::LoadingSnapshot);
        load_snapshot(snapshot)?
    };
    let (mut store, insights, stats, top_picks) = loaded.into_parts();
    if let Some(path) = issues {
        let _phase = set_phase(SessionPhase::LoadingIssues);
        let records = load_issues_jsonl(path)?;
        tracing::info!(path = %path.display(), issues = records.len(), "Loaded issue records");
        store = IssueStore::new(records);
    }
    Ok(DashboardInputs {
        store,
        insights,
        stats,
        top_picks,
    })
}
