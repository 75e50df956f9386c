//! User domain model.

use serde::{Deserialize, Serialize};

use super::persona::Persona;
use crate::remote::UserResponse;

/// Display name used when neither a name nor an email local part is usable.
pub const DEFAULT_DISPLAY_NAME: &str = "Trip Planner User";

/// The signed-in user.
///
/// `is_new` distinguishes a freshly registered user who still has to take the
/// survey from a returning one. Serialized with camelCase keys since this is
/// the record that gets persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
}

impl User {
    /// Creates a user with no persona and no onboarding flag.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            is_new: None,
            persona: None,
        }
    }

    /// Local stand-in for an email the backend does not know yet.
    ///
    /// The email is trimmed and lower-cased. The display name falls back to
    /// the email's local part and then to [`DEFAULT_DISPLAY_NAME`].
    pub fn pending(name: &str, email: &str) -> Self {
        let email = email.trim().to_lowercase();
        let display_name = match name.trim() {
            "" => match email.split('@').next() {
                Some(local) if !local.is_empty() => local.to_string(),
                _ => DEFAULT_DISPLAY_NAME.to_string(),
            },
            trimmed => trimmed.to_string(),
        };

        Self {
            id: format!("pending_{}", chrono::Utc::now().timestamp_millis()),
            name: display_name,
            email,
            is_new: Some(true),
            persona: None,
        }
    }

    /// Maps a returning user loaded from the backend.
    pub fn from_backend(user: &UserResponse) -> Self {
        let persona = if user.ai_summary.is_empty() {
            None
        } else {
            Some(Persona::from_backend(user))
        };

        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            is_new: Some(false),
            persona,
        }
    }

    /// Returns a copy of this user with the persona replaced.
    pub fn with_persona(&self, persona: Persona) -> Self {
        Self {
            persona: Some(persona),
            ..self.clone()
        }
    }

    /// True while the user still has to complete the survey.
    pub fn needs_onboarding(&self) -> bool {
        self.is_new.unwrap_or(false)
    }
}
