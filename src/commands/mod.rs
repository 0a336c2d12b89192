//! CLI command implementations.
//!
//! - **explore**: interactive insights dashboard
//! - **explain**: one panel entry's drill-down, as text or JSON
//! - **summary**: every panel's status and top entries
//! - **init**: write a default `.depmap.toml`

pub mod explain;
pub mod explore;
pub mod init;
pub mod summary;

pub use explain::{explain_entry, ExplainConfig};
pub use explore::{run_explore, ExploreConfig};
pub use init::init_config;
pub use summary::{print_summary, SummaryConfig};
