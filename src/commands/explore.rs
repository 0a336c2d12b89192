//! `depmap explore`: the interactive dashboard.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::DisplayConfig;
use crate::errors::DepmapError;
use crate::insights::Panel;
use crate::io::load_inputs;
use crate::observability::{set_focused_panel, set_snapshot};
use crate::tui::{DashboardApp, InsightsExplorer};

#[derive(Debug, Clone)]
pub struct ExploreConfig {
    pub snapshot: PathBuf,
    pub issues: Option<PathBuf>,
    /// Starting toggles, config file merged with command-line flags
    pub display: DisplayConfig,
    pub panel: Option<Panel>,
    pub select: Option<String>,
}

/// Load the snapshot and hand the terminal to the dashboard.
pub fn run_explore(config: ExploreConfig) -> Result<()> {
    let _snapshot = set_snapshot(&config.snapshot);
    let inputs = load_inputs(&config.snapshot, config.issues.as_deref())
        .with_context(|| format!("Failed to load {}", config.snapshot.display()))?;

    let mut app = DashboardApp::new(inputs, config.snapshot.clone(), config.issues.clone());
    prepare_app(&mut app, &config)?;
    set_focused_panel(app.dashboard().focused().title());

    let mut explorer = InsightsExplorer::new(app, config.display.tick_ms)?;
    explorer.run()
}

/// Apply starting toggles, focus and selection.
pub fn prepare_app(app: &mut DashboardApp, config: &ExploreConfig) -> Result<(), DepmapError> {
    app.apply_display(&config.display);
    if let Some(panel) = config.panel {
        app.dashboard_mut().focus(panel);
        if let Some(id) = &config.select {
            if !app.dashboard_mut().select_id(panel, id) {
                return Err(DepmapError::invalid_argument(format!(
                    "no entry for '{id}' in panel {}",
                    panel.title()
                )));
            }
        }
    }
    Ok(())
}
