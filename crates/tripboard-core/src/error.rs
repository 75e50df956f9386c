//! Error types for the Tripboard client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the store, its repositories and configuration.
///
/// Remote failures are not represented here; they surface as
/// [`crate::remote::ApiError`] and are handled by callers before anything
/// reaches the store.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TripboardError {
    /// A per-group write targeted a group the store does not know about.
    #[error("Unknown group: '{id}'")]
    UnknownGroup { id: String },

    /// A group id that is already taken by another group.
    #[error("Duplicate group: '{id}'")]
    DuplicateGroup { id: String },

    /// A whiteboard phase change that the workflow does not permit.
    #[error("Invalid whiteboard transition for group '{group_id}': {from} -> {to}")]
    InvalidTransition {
        group_id: String,
        from: String,
        to: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TripboardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownGroup error
    pub fn unknown_group(id: impl Into<String>) -> Self {
        Self::UnknownGroup { id: id.into() }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_unknown_group(&self) -> bool {
        matches!(self, Self::UnknownGroup { .. })
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TripboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TripboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TripboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TripboardError>`.
pub type Result<T> = std::result::Result<T, TripboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: TripboardError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: TripboardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        match err {
            TripboardError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_group_display() {
        let err = TripboardError::unknown_group("grp_abc123");
        assert!(err.is_unknown_group());
        assert_eq!(err.to_string(), "Unknown group: 'grp_abc123'");
    }
}
