//! Configuration loading from file system
//!
//! Handles loading and parsing ~/.button-kit/config.json.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::types::Config;
use crate::error::UiKitError;

/// Path of the user config file (~/.button-kit/config.json)
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.button-kit/config.json").as_ref())
}

/// Read and parse a config file.
pub fn try_load_config(path: &Path) -> crate::error::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| UiKitError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str::<Config>(&contents)
        .map_err(|e| UiKitError::Config(format!("{}: {}", path.display(), e)))
}

/// Load configuration from ~/.button-kit/config.json
///
/// Returns Config::default() if the file is missing or any step fails;
/// failures are logged, never raised.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let path = config_path();

    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match try_load_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}
