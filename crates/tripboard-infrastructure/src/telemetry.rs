//! Tracing subscriber setup.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;
use tripboard_core::config::LoggingConfig;

use crate::config_service::ENV_LOG;

/// Builds the log filter: `TRIPBOARD_LOG` first, then the configured level.
pub fn build_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log filter '{}'", config.level))
}

/// Installs the global tracing subscriber.
///
/// Returns `Ok(false)` when a global subscriber was already installed, so
/// calling this more than once is harmless.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<bool> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) if tracing::dispatcher::has_been_set() => {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
            Ok(false)
        }
        Err(e) => Err(anyhow!("Failed to install tracing subscriber: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        if std::env::var(ENV_LOG).is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "tripboard=notalevel".to_string(),
            json: false,
        };
        assert!(build_filter(&config).is_err());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig::default();
        init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
