//! Keyboard handling: classify the key, then execute the action.
//!
//! Classification is pure (`actions::determine_action`); this module is the
//! imperative shell that mutates the app.

use crossterm::event::KeyEvent;

use super::actions::{determine_action, DashboardAction};
use super::app::DashboardApp;
use crate::observability::{set_focused_panel, set_phase, SessionPhase};

/// Handle keyboard input and return true if should quit
pub fn handle_key(app: &mut DashboardApp, key: KeyEvent) -> bool {
    let _phase = set_phase(SessionPhase::HandlingInput);
    app.clear_status_message();

    let Some(action) = determine_action(key) else {
        return false;
    };
    tracing::trace!(?action, "Key action");
    execute_action(app, action)
}

/// Execute an action against the app; true means quit.
pub fn execute_action(app: &mut DashboardApp, action: DashboardAction) -> bool {
    let dashboard = app.dashboard_mut();
    match action {
        DashboardAction::Quit => return true,

        DashboardAction::MoveUp => dashboard.move_selection_up(),
        DashboardAction::MoveDown => dashboard.move_selection_down(),

        DashboardAction::NextPanel => {
            dashboard.focus_next();
            set_focused_panel(dashboard.focused().title());
        }
        DashboardAction::PreviousPanel => {
            dashboard.focus_previous();
            set_focused_panel(dashboard.focused().title());
        }

        DashboardAction::ScrollDetailUp => dashboard.scroll_detail_up(),
        DashboardAction::ScrollDetailDown => dashboard.scroll_detail_down(),

        DashboardAction::ToggleExplanations => dashboard.toggle_explanations(),
        DashboardAction::ToggleCalculation => dashboard.toggle_calculation_detail(),
        DashboardAction::ToggleDetailPanel => dashboard.toggle_detail_panel(),

        DashboardAction::Reload => app.reload(),
    }

    false
}
