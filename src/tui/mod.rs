//! Interactive TUI for exploring graph insights.
//!
//! A keyboard-driven grid of metric panels with a detail panel that explains
//! the selected entry.
//!
//! # Examples
//!
//! ```rust,ignore
//! use depmap::io::load_inputs;
//! use depmap::tui::{DashboardApp, InsightsExplorer};
//!
//! let inputs = load_inputs(&snapshot, None)?;
//! let app = DashboardApp::new(inputs, snapshot, None);
//! InsightsExplorer::new(app, 100)?.run()?;
//! ```

pub mod actions;
pub mod app;
pub mod components;
pub mod detail_view;
pub mod layout;
pub mod navigation;
pub mod panel_view;
pub mod priority_view;
pub mod theme;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::errors::DepmapError;
use crate::observability::set_tui_active;

pub use actions::{determine_action, DashboardAction};
pub use app::{DashboardApp, StatusKind, StatusMessage};
pub use theme::Theme;

/// Dashboard TUI manager
pub struct InsightsExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: DashboardApp,
    tick: Duration,
}

impl InsightsExplorer {
    /// Take over the terminal for `app`, polling input every `tick_ms`.
    pub fn new(app: DashboardApp, tick_ms: u64) -> Result<Self> {
        enable_raw_mode().map_err(DepmapError::Terminal)?;
        set_tui_active(true);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(abandon_setup)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            abandon_setup(e)
        })?;

        Ok(Self {
            terminal,
            app,
            tick: Duration::from_millis(tick_ms.max(1)),
        })
    }

    /// Run the interactive TUI event loop
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(tick_ms = self.tick.as_millis() as u64, "Dashboard started");
        loop {
            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.cleanup()?;
        tracing::debug!("Dashboard closed");
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for InsightsExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Undo raw mode and the dashboard flag after setup failed part way.
fn abandon_setup(error: io::Error) -> DepmapError {
    set_tui_active(false);
    let _ = disable_raw_mode();
    DepmapError::Terminal(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::is_tui_active;
    use crate::observability::tracing::TUI_FLAG_LOCK;

    #[test]
    fn test_failed_setup_releases_terminal_flag() {
        let _guard = TUI_FLAG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_tui_active(true);

        let err = abandon_setup(io::Error::other("no tty"));

        assert!(!is_tui_active());
        assert!(matches!(err, DepmapError::Terminal(_)));
        assert_eq!(err.code(), crate::errors::ErrorCode::TERMINAL);
    }
}
