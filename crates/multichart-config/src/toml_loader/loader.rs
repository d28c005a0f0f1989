//! Core TOML config loading.

use crate::schema::AppConfig;
use crate::validation;
use multichart_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. The result is validated; an invalid
/// config is an error rather than a partially applied one.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve a load result for `path` to a usable config.
///
/// A missing file is the normal case and is not logged as a warning; any
/// other failure falls back to built-in defaults with a warning.
pub fn or_default(path: &Path, loaded: Result<AppConfig, ConfigError>) -> AppConfig {
    match loaded {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            warn!("config load failed, using defaults: {e}");
            AppConfig::default()
        }
    }
}
