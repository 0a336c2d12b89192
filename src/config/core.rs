use serde::{Deserialize, Serialize};

use super::display::{DisplayConfig, LoggingConfig};

/// Root configuration structure for depmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DepmapConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Template written by `depmap init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Depmap Configuration

[display]
show_explanations = true
show_calculation = true
show_detail_panel = true
tick_ms = 100

[logging]
# level = "info"
# file = "depmap.log"
"#;
