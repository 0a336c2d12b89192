//! Configuration for the depmap dashboard.
//!
//! Settings come from `.depmap.toml`, searched for in the working directory
//! and its ancestors, then in the user config directory. Command-line flags
//! override whatever the file says.

mod core;
mod display;
pub mod loader;

pub use self::core::{DepmapConfig, DEFAULT_CONFIG_TOML};
pub use self::display::{DisplayConfig, LoggingConfig};
pub use loader::{
    discover_config, discover_config_near, load_config, load_config_from, load_config_near,
    parse_config, DiscoveredConfig, CONFIG_FILE_NAME,
};
