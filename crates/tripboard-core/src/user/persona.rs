//! Travel persona produced by the backend from survey answers.

use serde::{Deserialize, Serialize};

use crate::remote::UserResponse;

/// Derived summary of a user's travel preferences.
///
/// Personas are produced remotely and attached to the [`super::User`] once
/// available. They are only ever replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub avoidances: Vec<String>,
}

impl Persona {
    /// Builds a persona from the backend's generated user summary.
    ///
    /// The backend only returns a free-text summary, so preference and
    /// avoidance lists start empty.
    pub fn from_backend(user: &UserResponse) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            summary: user.ai_summary.clone(),
            preferences: Vec::new(),
            avoidances: Vec::new(),
        }
    }
}
