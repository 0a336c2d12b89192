//! Thread-local context tracking for crash reports.
//!
//! Records what the dashboard was doing (loading, drawing, handling a key)
//! and which snapshot and panel were involved, so a panic report can say so.
//! Guards restore the previous context on drop.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

thread_local! {
    static CURRENT_CONTEXT: RefCell<SessionContext> = const { RefCell::new(SessionContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub phase: Option<SessionPhase>,
    /// Snapshot file the dashboard was loaded from
    pub snapshot: Option<PathBuf>,
    /// Title of the focused panel
    pub panel: Option<&'static str>,
}

impl SessionContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            snapshot: None,
            panel: None,
        }
    }
}

/// Stages of a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoadingSnapshot,
    LoadingIssues,
    Rendering,
    HandlingInput,
    Reloading,
    Explaining,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingSnapshot => write!(f, "loading_snapshot"),
            Self::LoadingIssues => write!(f, "loading_issues"),
            Self::Rendering => write!(f, "rendering"),
            Self::HandlingInput => write!(f, "handling_input"),
            Self::Reloading => write!(f, "reloading"),
            Self::Explaining => write!(f, "explaining"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: SessionContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut SessionContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the guard drops.
#[must_use]
pub fn set_phase(phase: SessionPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Record the snapshot path until the guard drops.
#[must_use]
pub fn set_snapshot(path: &Path) -> ContextGuard {
    let path = path.to_path_buf();
    update(|ctx| ctx.snapshot = Some(path))
}

/// Record the focused panel without a guard; it persists until changed.
pub fn set_focused_panel(title: &'static str) {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow_mut().panel = Some(title));
}

#[must_use]
pub fn get_current_context() -> SessionContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
