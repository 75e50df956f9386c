//! Group domain models.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::remote::GroupInfo;

/// Prefix of client-generated group ids.
pub const LOCAL_ID_PREFIX: &str = "grp_";

const LOCAL_TOKEN_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a group, tagged with who issued it.
///
/// `Local` ids are placeholders minted by this client and are only valid for
/// client-side flows. `Remote` ids come from the backend and are
/// authoritative. Two ids with the same text but different origins are not
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "origin", content = "value", rename_all = "snake_case")]
pub enum GroupId {
    Local(String),
    Remote(String),
}

impl GroupId {
    /// Generates a fresh local id: `grp_` followed by a short base-36 token.
    pub fn generate_local() -> Self {
        let mut rng = rand::thread_rng();
        let token: String = (0..LOCAL_TOKEN_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self::Local(format!("{LOCAL_ID_PREFIX}{token}"))
    }

    pub fn remote(id: impl Into<String>) -> Self {
        Self::Remote(id.into())
    }

    /// The raw id text, regardless of origin.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(id) | Self::Remote(id) => id,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a group's trip plan.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GroupStatus {
    #[default]
    Planning,
    Draft,
    Finalized,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Presence {
    Online,
    #[default]
    Offline,
}

/// A member of a group as shown on the whiteboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub presence: Presence,
    /// Role reported by the backend (e.g. "creator"), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Member {
    /// Maps one loosely-typed member entry of a backend group.
    ///
    /// The name falls back to the email and then to `"Member"`; the id falls
    /// back to the entry's position in the list. Numeric fields are read as
    /// their decimal text.
    fn from_remote(index: usize, raw: &Value) -> Self {
        let text = |key: &str| match raw.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };

        Self {
            id: text("id").unwrap_or_else(|| index.to_string()),
            name: text("name")
                .or_else(|| text("email"))
                .unwrap_or_else(|| "Member".to_string()),
            presence: Presence::Offline,
            role: text("role"),
        }
    }
}

/// A group planning one trip together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub destination_label: String,
    #[serde(default)]
    pub status: GroupStatus,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_plan_id: Option<String>,
    /// Backend-generated summary of the group's combined knowledge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_summary: Option<String>,
}

impl Group {
    /// Creates an empty group in the `planning` status.
    pub fn new(id: GroupId, name: impl Into<String>, destination_label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            destination_label: destination_label.into(),
            status: GroupStatus::Planning,
            members: Vec::new(),
            selected_plan_id: None,
            knowledge_summary: None,
        }
    }

    /// Placeholder for a group joined by code before the backend confirmed it.
    pub fn placeholder(code: &str) -> Self {
        Self::new(GroupId::remote(code), format!("Group {code}"), "TBD")
    }

    /// Maps a group returned by the backend.
    pub fn from_remote(info: &GroupInfo) -> Self {
        Self {
            members: info
                .members
                .iter()
                .enumerate()
                .map(|(idx, raw)| Member::from_remote(idx, raw))
                .collect(),
            knowledge_summary: info.ai_group_kn_summary.clone(),
            ..Self::new(GroupId::remote(&info.id), &info.name, &info.destination)
        }
    }
}
