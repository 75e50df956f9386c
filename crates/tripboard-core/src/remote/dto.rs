//! Request and response bodies exchanged with the backend.
//!
//! Shapes mirror the backend's JSON. Loosely-typed fields stay as
//! `serde_json` values so they can be passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::plan::PlanOption;

// ---------- Users ----------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub name: String,
    /// Survey answers, as `{"answers": {"<question id>": "<answer>"}}`.
    pub user_answer: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub persona_traits: Map<String, Value>,
    #[serde(default)]
    pub ai_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: String,
    pub name: String,
    pub destination: String,
    #[serde(default)]
    pub creator_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_group_kn_summary: Option<String>,
    #[serde(default)]
    pub members: Vec<Value>,
    #[serde(default)]
    pub plans: Vec<PlanResponse>,
}

impl GroupInfo {
    /// Options of the most recently stored plan, if it has any.
    pub fn latest_plan_options(&self) -> Option<Vec<PlanOption>> {
        self.plans
            .last()
            .map(PlanResponse::plan_options)
            .filter(|options| !options.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user: UserResponse,
    #[serde(default)]
    pub groups: Vec<GroupInfo>,
}

// ---------- Groups ----------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupPayload {
    pub group_name: String,
    pub destination: String,
    pub creator_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub creator_id: String,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberPayload {
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub group_id: String,
    pub user_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMemberTraits {
    #[serde(default)]
    pub persona_traits: Map<String, Value>,
    #[serde(default)]
    pub ai_summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupTraitsResponse {
    pub group_id: String,
    pub group_name: String,
    #[serde(default)]
    pub group_members: Vec<GroupMemberTraits>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---------- Recommendations ----------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub short_trip: Map<String, Value>,
    #[serde(default)]
    pub long_trip: Map<String, Value>,
}

// ---------- Plans ----------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreatePayload {
    pub raw_data: Map<String, Value>,
}

impl PlanCreatePayload {
    /// Plan generation input built from fetched recommendations.
    pub fn from_recommendations(recommendations: &RecommendationsResponse) -> Self {
        let mut raw_data = Map::new();
        raw_data.insert(
            "short_trip".to_string(),
            Value::Object(recommendations.short_trip.clone()),
        );
        raw_data.insert(
            "long_trip".to_string(),
            Value::Object(recommendations.long_trip.clone()),
        );
        Self { raw_data }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanByGroupNamePayload {
    pub group_name: String,
    pub raw_data: Map<String, Value>,
}

/// A stored plan. The generated options live under `plan_json.plan_options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub plan_json: Value,
    #[serde(default)]
    pub summary_caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost_per_person: Option<f64>,
}

impl PlanResponse {
    /// Parses the generated options one by one. Entries that do not parse
    /// are logged and skipped; a missing or non-list value yields none.
    pub fn plan_options(&self) -> Vec<PlanOption> {
        let Some(raw) = self.plan_json.get("plan_options") else {
            return Vec::new();
        };
        let Some(entries) = raw.as_array() else {
            tracing::warn!(plan_id = %self.id, "Ignoring plan options that are not a list");
            return Vec::new();
        };

        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                match PlanOption::deserialize(entry) {
                    Ok(option) => Some(option),
                    Err(e) => {
                        tracing::warn!(plan_id = %self.id, index, error = %e, "Skipping malformed plan option");
                        None
                    }
                }
            })
            .collect()
    }
}
