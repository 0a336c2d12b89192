use serde::{Deserialize, Serialize};

/// Dashboard display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show each panel's "what is" text under its title
    #[serde(default = "default_true")]
    pub show_explanations: bool,

    /// Show the calculation proof in the detail panel
    #[serde(default = "default_true")]
    pub show_calculation: bool,

    /// Show the detail panel on wide terminals
    #[serde(default = "default_true")]
    pub show_detail_panel: bool,

    /// Input poll interval in milliseconds (default: 100)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_explanations: true,
            show_calculation: true,
            show_detail_panel: true,
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    100
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "depmap=debug"
    #[serde(default)]
    pub level: Option<String>,

    /// Log file; without one, logs are dropped while the dashboard runs
    #[serde(default)]
    pub file: Option<std::path::PathBuf>,
}
