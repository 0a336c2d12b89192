// Test utility module for depmap integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use depmap::io::{load_inputs, DashboardInputs, Snapshot};
use depmap::model::{
    Cycle, GraphStats, InsightItem, Insights, Issue, IssueStore, Metric, MetricFamily,
    MetricRunStatus, TopPick,
};

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The checked-in sample snapshot, fully loaded.
pub fn sample_inputs() -> DashboardInputs {
    load_inputs(&fixture_path("sample_snapshot.json"), None).expect("sample snapshot loads")
}

// Helper to create temporary test files
pub fn create_test_file(content: &str, name: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    (temp_dir, file_path)
}

/// Builder for in-memory snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFixture {
    snapshot: Snapshot,
}

impl SnapshotFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(mut self, issue: Issue) -> Self {
        self.snapshot.issues.push(issue);
        self
    }

    pub fn insights(mut self, update: impl FnOnce(&mut Insights)) -> Self {
        update(&mut self.snapshot.insights);
        self
    }

    pub fn score(mut self, metric: Metric, id: &str, value: f64) -> Self {
        self.snapshot.stats.set_score(metric, id, value);
        self
    }

    pub fn status(mut self, family: MetricFamily, status: MetricRunStatus) -> Self {
        self.snapshot.stats.set_status(family, status);
        self
    }

    pub fn pick(mut self, id: &str, score: f64, unblocks: usize) -> Self {
        self.snapshot.top_picks.push(TopPick {
            id: id.to_string(),
            title: String::new(),
            score,
            unblocks,
            reasons: Vec::new(),
        });
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }

    /// Split into the pieces the dashboard and explanation engine take.
    pub fn parts(self) -> (IssueStore, Insights, GraphStats, Vec<TopPick>) {
        self.snapshot.into_parts()
    }

    /// Serialize into `dir` and return the file path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("snapshot.json");
        let json = serde_json::to_string_pretty(&self.snapshot).expect("snapshot serializes");
        std::fs::write(&path, json).expect("Failed to write snapshot");
        path
    }
}

/// Scored items in the given order.
pub fn items(entries: &[(&str, f64)]) -> Vec<InsightItem> {
    entries
        .iter()
        .map(|(id, value)| InsightItem::new(*id, *value))
        .collect()
}

pub fn cycle(members: &[&str]) -> Cycle {
    members.iter().copied().collect()
}
