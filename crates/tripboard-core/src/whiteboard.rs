//! Per-group workflow phase shown on the whiteboard.
//!
//! Phases advance `gathering -> profile_reveal -> recommendations ->
//! plans_generating -> plan_options -> plan_detail`. Moving forward may skip
//! phases (a group loaded with stored plans jumps straight to
//! `plan_options`). Only the backward moves needed to regenerate plans or
//! recover from a failed generation are permitted.

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WhiteboardPhase {
    #[default]
    Gathering,
    ProfileReveal,
    Recommendations,
    PlansGenerating,
    PlanOptions,
    PlanDetail,
}

impl WhiteboardPhase {
    fn rank(self) -> u8 {
        match self {
            Self::Gathering => 0,
            Self::ProfileReveal => 1,
            Self::Recommendations => 2,
            Self::PlansGenerating => 3,
            Self::PlanOptions => 4,
            Self::PlanDetail => 5,
        }
    }

    /// Whether the workflow allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: WhiteboardPhase) -> bool {
        use WhiteboardPhase::*;

        if next.rank() >= self.rank() {
            return true;
        }

        matches!(
            (self, next),
            (PlanOptions | PlanDetail, PlansGenerating)
                | (PlanDetail, PlanOptions)
                | (PlansGenerating, Recommendations)
        )
    }

    /// True once plan options exist for the group.
    pub fn has_plans(self) -> bool {
        matches!(self, Self::PlanOptions | Self::PlanDetail)
    }
}
