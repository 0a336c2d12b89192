//! Observability infrastructure: tracing setup, crash reports and context.
//!
//! Install the panic hook and subscriber at startup:
//!
//! ```ignore
//! use depmap::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(None, 0, None).ok();
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, set_focused_panel, set_phase, set_snapshot, ContextGuard, SessionContext,
    SessionPhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, is_tui_active, set_tui_active, LOG_ENV_VAR};
