//! Configuration loading.
//!
//! Reads `config.toml` from the Tripboard config directory and layers
//! environment overrides on top:
//!
//! - `TRIPBOARD_API_BASE_URL`: backend base URL
//! - `TRIPBOARD_STATE_DIR`: directory of the persisted state file
//! - `TRIPBOARD_LOG`: log filter directive

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use tripboard_core::config::TripboardConfig;
use tripboard_core::error::Result;

use crate::paths::TripboardPaths;

pub const ENV_API_BASE_URL: &str = "TRIPBOARD_API_BASE_URL";
pub const ENV_STATE_DIR: &str = "TRIPBOARD_STATE_DIR";
pub const ENV_LOG: &str = "TRIPBOARD_LOG";

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `config.toml` in the platform config directory.
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(TripboardPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file (defaults when it is absent) and applies the process
    /// environment overrides.
    pub fn load(&self) -> Result<TripboardConfig> {
        let mut config = self.load_file()?;
        apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads the file only, without environment overrides.
    pub fn load_file(&self) -> Result<TripboardConfig> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No config file, using defaults");
            return Ok(TripboardConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = TripboardConfig::from_toml_str(&content)?;
        info!(path = %self.path.display(), "Loaded config file");
        Ok(config)
    }
}

/// Applies overrides found through `lookup`; empty values are ignored.
pub fn apply_overrides<F>(config: &mut TripboardConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = get(ENV_API_BASE_URL) {
        config.api.base_url = base_url;
    }
    if let Some(dir) = get(ENV_STATE_DIR) {
        config.storage.state_dir = Some(PathBuf::from(dir));
    }
    if let Some(level) = get(ENV_LOG) {
        config.logging.level = level;
    }
}
