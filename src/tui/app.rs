//! Application state for the dashboard TUI.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::path::{Path, PathBuf};

use super::{navigation, view};
use crate::config::DisplayConfig;
use crate::insights::InsightsDashboard;
use crate::io::{load_inputs, DashboardInputs};
use crate::model::{GraphStats, IssueStore};
use crate::observability::{set_phase, SessionPhase};

/// Severity of the footer status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Main application state
pub struct DashboardApp {
    /// Panel collections and navigation state
    dashboard: InsightsDashboard,
    /// Issue metadata and dependency edges
    store: IssueStore,
    /// Scores, run status and degrees
    stats: GraphStats,
    /// Snapshot file re-read on reload
    snapshot_path: PathBuf,
    /// Optional JSONL issue file re-read on reload
    issues_path: Option<PathBuf>,
    /// Footer message, cleared on the next key press
    status_message: Option<StatusMessage>,
    /// Terminal size at the last render
    terminal_size: (u16, u16),
}

impl DashboardApp {
    /// Create application state from loaded inputs
    pub fn new(inputs: DashboardInputs, snapshot_path: PathBuf, issues_path: Option<PathBuf>) -> Self {
        Self {
            dashboard: InsightsDashboard::new(inputs.insights, inputs.top_picks),
            store: inputs.store,
            stats: inputs.stats,
            snapshot_path,
            issues_path,
            status_message: None,
            terminal_size: (80, 24),
        }
    }

    /// Apply the starting display toggles
    pub fn apply_display(&mut self, display: &DisplayConfig) {
        self.dashboard.set_show_explanations(display.show_explanations);
        self.dashboard.set_show_calculation(display.show_calculation);
        self.dashboard.set_show_detail_panel(display.show_detail_panel);
    }

    /// Handle keyboard input, returning true when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        navigation::handle_key(self, key)
    }

    /// Render the current state
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.terminal_size = (area.width, area.height);
        let _phase = set_phase(SessionPhase::Rendering);
        view::render(
            frame,
            &mut self.dashboard,
            &self.store,
            &self.stats,
            &self.snapshot_path,
            self.status_message.as_ref(),
        );
    }

    /// Re-read the snapshot (and issue file) and swap the collections in.
    ///
    /// On failure the previous data stays and the error shows in the footer.
    pub fn reload(&mut self) {
        let _phase = set_phase(SessionPhase::Reloading);
        match load_inputs(&self.snapshot_path, self.issues_path.as_deref()) {
            Ok(inputs) => {
                self.store = inputs.store;
                self.stats = inputs.stats;
                self.dashboard.refresh(inputs.insights, inputs.top_picks);
                self.set_status_message(StatusKind::Info, "Snapshot reloaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reload failed, keeping previous snapshot");
                self.set_status_message(StatusKind::Error, format!("Reload failed: {e}"));
            }
        }
    }

    pub fn dashboard(&self) -> &InsightsDashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut InsightsDashboard {
        &mut self.dashboard
    }

    pub fn store(&self) -> &IssueStore {
        &self.store
    }

    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Get terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
