//! Persisted state model.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Namespace key of the single durable entry holding [`PersistedState`].
pub const STORE_NAMESPACE: &str = "trip-planner-store";

/// The only part of the store that persists across restarts.
///
/// Groups, whiteboard phases and plan caches are session-scoped and are
/// re-fetched from the backend on every load.
///
/// Serialized as `{"currentUser": ...}`; there is no version field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub current_user: Option<User>,
}

impl PersistedState {
    pub fn new(current_user: Option<User>) -> Self {
        Self { current_user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_is_current_user_only() {
        let state = PersistedState::new(Some(User::new("u1", "Ann", "ann@x.com")));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"currentUser": {"id": "u1", "name": "Ann", "email": "ann@x.com"}})
        );
    }

    #[test]
    fn test_empty_state_serializes_null_user() {
        let json = serde_json::to_value(PersistedState::default()).unwrap();
        assert_eq!(json, json!({"currentUser": null}));
    }

    #[test]
    fn test_missing_key_deserializes_to_default() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedState::default());
    }
}
