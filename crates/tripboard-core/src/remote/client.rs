//! Remote API client trait.

use async_trait::async_trait;

use super::dto::*;
use super::error::ApiResult;

/// Calls against the trip-planning backend.
///
/// Implementations own transport concerns; every failure is reported as an
/// [`super::ApiError`].
#[async_trait]
pub trait TripApi: Send + Sync {
    // Users
    async fn create_user(&self, payload: &CreateUserPayload) -> ApiResult<UserResponse>;

    /// Loads a user and all of their groups. A 404 means the email is unknown.
    async fn get_user_info(&self, email: &str) -> ApiResult<UserInfoResponse>;

    // Groups
    async fn create_group(&self, payload: &CreateGroupPayload) -> ApiResult<GroupResponse>;

    async fn add_member(
        &self,
        group_id: &str,
        payload: &AddMemberPayload,
    ) -> ApiResult<MemberResponse>;

    async fn get_group_traits(&self, group_id: &str) -> ApiResult<GroupTraitsResponse>;

    /// Rebuilds the group's knowledge base on the backend.
    async fn process_group(&self, group_id: &str) -> ApiResult<MessageResponse>;

    // Recommendations
    async fn get_recommendations(&self, group_id: &str) -> ApiResult<RecommendationsResponse>;

    // Plans
    async fn create_plan_for_group(
        &self,
        group_id: &str,
        payload: &PlanCreatePayload,
    ) -> ApiResult<PlanResponse>;

    async fn create_plan_by_group_name(
        &self,
        payload: &GeneratePlanByGroupNamePayload,
    ) -> ApiResult<PlanResponse>;
}
