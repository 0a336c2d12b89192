use std::fs;
use std::path::{Path, PathBuf};

use super::core::DepmapConfig;
use crate::errors::DepmapError;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".depmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<DepmapConfig, String> {
    let config = toml::from_str::<DepmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    if config.display.tick_ms == 0 {
        return Err("display.tick_ms must be greater than zero".to_string());
    }
    Ok(config)
}

/// Load an explicitly named config file; any failure is an error.
pub fn load_config_from(path: &Path) -> Result<DepmapConfig, DepmapError> {
    let contents = fs::read_to_string(path).map_err(|e| DepmapError::io(path, e))?;
    parse_config(&contents).map_err(|message| DepmapError::config(path, message))
}

/// Configuration found by discovery, with the problems met along the way.
///
/// Discovery runs before the tracing subscriber exists, so problems are
/// collected here and reported by [`DiscoveredConfig::log`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredConfig {
    pub config: DepmapConfig,
    /// File the config came from; `None` means defaults.
    pub source: Option<PathBuf>,
    /// Unreadable or invalid candidates that were passed over.
    pub warnings: Vec<String>,
}

impl DiscoveredConfig {
    /// An explicitly named file that loaded cleanly.
    pub fn explicit(path: &Path, config: DepmapConfig) -> Self {
        Self {
            config,
            source: Some(path.to_path_buf()),
            warnings: Vec::new(),
        }
    }

    /// Report discovery results. Call once logging is set up.
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
        match &self.source {
            Some(path) => tracing::debug!(path = %path.display(), "Loaded config"),
            None => tracing::debug!("No config found. Using default config."),
        }
    }
}

/// Try one candidate location. A missing file is `Ok(None)`; an unreadable
/// or invalid one is an error message.
pub(crate) fn try_load_config_from_path(
    config_path: &Path,
) -> Result<Option<DepmapConfig>, String> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(format!(
                "Failed to read config file {}: {e}",
                config_path.display()
            ))
        }
    };
    parse_config(&contents)
        .map(Some)
        .map_err(|e| format!("{e} ({}). Skipping it.", config_path.display()))
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Candidate config paths: `start` and its ancestors, then the user config dir.
pub fn config_candidates(start: PathBuf) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect();
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("depmap").join("config.toml"));
    }
    candidates
}

/// Discover configuration from the working directory without logging.
pub fn discover_config() -> DiscoveredConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config_near(dir),
        Err(e) => DiscoveredConfig {
            warnings: vec![format!(
                "Failed to get current directory: {e}. Using default config."
            )],
            ..DiscoveredConfig::default()
        },
    }
}

/// Discover configuration starting at `start`. The first candidate that
/// loads wins; bad candidates are recorded and skipped.
pub fn discover_config_near(start: PathBuf) -> DiscoveredConfig {
    let mut discovered = DiscoveredConfig::default();
    for path in config_candidates(start) {
        match try_load_config_from_path(&path) {
            Ok(Some(config)) => {
                discovered.config = config;
                discovered.source = Some(path);
                break;
            }
            Ok(None) => {}
            Err(warning) => discovered.warnings.push(warning),
        }
    }
    discovered
}

/// Discover and load configuration, falling back to defaults.
pub fn load_config() -> DepmapConfig {
    let discovered = discover_config();
    discovered.log();
    discovered.config
}

/// Discover configuration starting at `start`, logging any problems.
pub fn load_config_near(start: PathBuf) -> DepmapConfig {
    let discovered = discover_config_near(start);
    discovered.log();
    discovered.config
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(indoc! {r#"
            [display]
            show_explanations = false
        "#})
        .unwrap();
        assert!(!config.display.show_explanations);
        assert!(config.display.show_calculation);
        assert_eq!(config.display.tick_ms, 100);
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn test_parse_rejects_zero_tick() {
        let err = parse_config("[display]\ntick_ms = 0\n").unwrap_err();
        assert!(err.contains("tick_ms"));
    }

    #[test]
    fn test_parse_reports_toml_errors() {
        let err = parse_config("[display\n").unwrap_err();
        assert!(err.starts_with("Failed to parse .depmap.toml"));
    }

    #[test]
    fn test_directory_ancestors_bounded() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("x").join("y");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let config = load_config_near(nested);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let root = TempDir::new().unwrap();
        let path = root.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not = [valid").unwrap();
        assert!(try_load_config_from_path(&path).is_err());
        assert_eq!(
            try_load_config_from_path(&root.path().join("absent.toml")),
            Ok(None)
        );
        assert!(matches!(
            load_config_from(&path),
            Err(DepmapError::Config { .. })
        ));
    }

    #[test]
    fn test_discovery_records_invalid_candidate() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("x");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[display\n").unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[display]\ntick_ms = 40\n",
        )
        .unwrap();

        let discovered = discover_config_near(nested.clone());
        assert_eq!(discovered.config.display.tick_ms, 40);
        assert_eq!(discovered.source, Some(root.path().join(CONFIG_FILE_NAME)));
        assert_eq!(discovered.warnings.len(), 1);
        assert!(discovered.warnings[0].starts_with("Failed to parse .depmap.toml"));
        assert!(discovered.warnings[0].contains(&nested.display().to_string()));
    }

    #[test]
    fn test_explicit_config_has_no_warnings() {
        let path = Path::new("/etc/depmap.toml");
        let discovered = DiscoveredConfig::explicit(path, DepmapConfig::default());
        assert_eq!(discovered.source.as_deref(), Some(path));
        assert!(discovered.warnings.is_empty());
    }
}
