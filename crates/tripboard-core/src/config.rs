//! Configuration model.
//!
//! Every section and field has a default, so a partial (or missing)
//! `config.toml` is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::STORE_NAMESPACE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7878/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripboardConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl TripboardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Name of the persisted entry; the state file is `<namespace>.json`.
    pub namespace: String,
    /// Directory holding the state file. `None` means the platform config dir.
    pub state_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: STORE_NAMESPACE.to_string(),
            state_dir: None,
        }
    }
}

impl StorageConfig {
    pub fn state_file_name(&self) -> String {
        format!("{}.json", self.namespace)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `tripboard_core=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TripboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, TripboardConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.storage.state_file_name(), "trip-planner-store.json");
    }

    #[test]
    fn test_partial_toml_overrides_only_given_fields() {
        let config = TripboardConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://trips.example.com/api/v1"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://trips.example.com/api/v1");
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_serialization_error() {
        let err = TripboardConfig::from_toml_str("[api").unwrap_err();
        assert!(err.is_serialization());
    }
}
