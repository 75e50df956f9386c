//! Plan option models.
//!
//! Field names follow the backend's snake_case payloads so options can be
//! cached verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of itinerary. Values the client does not know are kept as
/// [`PlanType::Other`] so options round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanType {
    InCity,
    OutOfCity,
    InCityAndDayTrip,
    ShortTrip,
    HybridCityAndTrip,
    Other(String),
}

impl PlanType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InCity => "in_city",
            Self::OutOfCity => "out_of_city",
            Self::InCityAndDayTrip => "in_city_and_day_trip",
            Self::ShortTrip => "short_trip",
            Self::HybridCityAndTrip => "hybrid_city_and_trip",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for PlanType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "in_city" => Self::InCity,
            "out_of_city" => Self::OutOfCity,
            "in_city_and_day_trip" => Self::InCityAndDayTrip,
            "short_trip" => Self::ShortTrip,
            "hybrid_city_and_trip" => Self::HybridCityAndTrip,
            _ => Self::Other(raw),
        }
    }
}

impl From<PlanType> for String {
    fn from(plan_type: PlanType) -> Self {
        match plan_type {
            PlanType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads cost estimates whose values may be strings, numbers or booleans.
/// Nulls are dropped; nested values keep their JSON text.
fn lenient_cost_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect())
}

/// One scheduled event within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub location: String,
    pub description: String,
    pub activity_type: String,
    pub activity_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Citation for how a plan activity was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSource {
    pub url: String,
    pub title: String,
    pub used_for: String,
}

/// One complete candidate itinerary for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOption {
    pub plan_id: String,
    pub plan_type: PlanType,
    pub plan_variant: String,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
    #[serde(default)]
    pub why_fit_user: String,
    #[serde(default, deserialize_with = "lenient_cost_map")]
    pub cost_estimates: BTreeMap<String, String>,
    #[serde(default)]
    pub sources: Vec<PlanSource>,
}

impl PlanOption {
    /// Creates an option with an empty schedule, mostly useful in tests and
    /// for optimistic placeholders.
    pub fn new(plan_id: impl Into<String>, plan_type: PlanType, plan_variant: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            plan_type,
            plan_variant: plan_variant.into(),
            schedule: Vec::new(),
            why_fit_user: String::new(),
            cost_estimates: BTreeMap::new(),
            sources: Vec::new(),
        }
    }

    pub fn day_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn activity_count(&self) -> usize {
        self.schedule.iter().map(|d| d.activities.len()).sum()
    }
}
