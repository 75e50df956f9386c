//! Path management for Tripboard files.
//!
//! ```text
//! ~/.config/tripboard/             # Config directory (platform specific)
//! ├── config.toml                  # Application configuration
//! └── trip-planner-store.json      # Persisted store state
//! ```

use std::path::PathBuf;

use tripboard_core::config::StorageConfig;
use tripboard_core::error::{Result, TripboardError};

const APP_DIR_NAME: &str = "tripboard";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TripboardPaths;

impl TripboardPaths {
    /// Returns the Tripboard configuration directory, e.g. `~/.config/tripboard/`.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| TripboardError::config("Cannot determine the config directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the file holding the persisted store state.
    ///
    /// `storage.state_dir` wins over the platform config directory.
    pub fn state_file(storage: &StorageConfig) -> Result<PathBuf> {
        let dir = match &storage.state_dir {
            Some(dir) => dir.clone(),
            None => Self::config_dir()?,
        };
        Ok(dir.join(storage.state_file_name()))
    }
}
