//! Pure action determination for dashboard keyboard handling.
//!
//! `determine_action` maps a key event to an intent without touching app
//! state; `navigation::execute_action` performs it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press can ask the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    /// Leave the dashboard.
    Quit,

    /// Move the focused panel's selection up by one item.
    MoveUp,

    /// Move the focused panel's selection down by one item.
    MoveDown,

    /// Focus the next panel, wrapping after the last.
    NextPanel,

    /// Focus the previous panel, wrapping before the first.
    PreviousPanel,

    ScrollDetailUp,

    ScrollDetailDown,

    /// Show or hide panel descriptions.
    ToggleExplanations,

    /// Show or hide the calculation proof.
    ToggleCalculation,

    /// Show or hide the detail panel.
    ToggleDetailPanel,

    /// Re-read the snapshot from disk.
    Reload,
}

/// Determine which action a key triggers, if any.
pub fn determine_action(key: KeyEvent) -> Option<DashboardAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(DashboardAction::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(DashboardAction::ScrollDetailDown),
            KeyCode::Char('k') | KeyCode::Up => Some(DashboardAction::ScrollDetailUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(DashboardAction::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(DashboardAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(DashboardAction::MoveDown),

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(DashboardAction::NextPanel),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            Some(DashboardAction::PreviousPanel)
        }

        KeyCode::Char('e') => Some(DashboardAction::ToggleExplanations),
        KeyCode::Char('x') => Some(DashboardAction::ToggleCalculation),
        KeyCode::Char('d') => Some(DashboardAction::ToggleDetailPanel),
        KeyCode::Char('r') => Some(DashboardAction::Reload),

        _ => None,
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn key_code_strategy() -> impl Strategy<Value = KeyCode> {
        prop_oneof![
            any::<char>().prop_map(KeyCode::Char),
            Just(KeyCode::Up),
            Just(KeyCode::Down),
            Just(KeyCode::Left),
            Just(KeyCode::Right),
            Just(KeyCode::Tab),
            Just(KeyCode::BackTab),
            Just(KeyCode::Enter),
            Just(KeyCode::Esc),
            Just(KeyCode::Home),
            Just(KeyCode::End),
        ]
    }

    proptest! {
        /// Property: same input always produces same output.
        #[test]
        fn deterministic(code in key_code_strategy(), with_ctrl in any::<bool>()) {
            let modifiers = if with_ctrl { KeyModifiers::CONTROL } else { KeyModifiers::NONE };
            let key = KeyEvent::new(code, modifiers);
            prop_assert_eq!(determine_action(key), determine_action(key));
        }

        /// Property: with Control held, only quit and detail scrolling are bound.
        #[test]
        fn control_keys_are_limited(code in key_code_strategy()) {
            let action = determine_action(KeyEvent::new(code, KeyModifiers::CONTROL));
            prop_assert!(matches!(
                action,
                None | Some(DashboardAction::Quit)
                    | Some(DashboardAction::ScrollDetailUp)
                    | Some(DashboardAction::ScrollDetailDown)
            ));
        }
    }
}
