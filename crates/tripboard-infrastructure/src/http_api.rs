//! `reqwest`-backed implementation of [`TripApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use tripboard_core::config::ApiConfig;
use tripboard_core::error::{Result, TripboardError};
use tripboard_core::remote::*;

/// Code attached to errors for success responses whose body did not parse.
pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";

/// Endpoint URLs relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    /// Validates `base_url`; a trailing slash is dropped.
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| TripboardError::config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Users
    pub fn create_user(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Takes the email as an `email` query parameter.
    pub fn user_info(&self) -> String {
        format!("{}/users/info", self.base_url)
    }

    // Groups
    pub fn create_group(&self) -> String {
        format!("{}/groups", self.base_url)
    }

    pub fn add_member(&self, group_id: &str) -> String {
        format!("{}/groups/{}/members", self.base_url, group_id)
    }

    pub fn group_traits(&self, group_id: &str) -> String {
        format!("{}/groups/{}/traits", self.base_url, group_id)
    }

    pub fn process_group(&self, group_id: &str) -> String {
        format!("{}/groups/{}/process", self.base_url, group_id)
    }

    // Recommendations
    pub fn recommendations(&self, group_id: &str) -> String {
        format!("{}/groups/{}/recommendations", self.base_url, group_id)
    }

    // Plans
    pub fn create_plan_for_group(&self, group_id: &str) -> String {
        format!("{}/groups/{}/plan", self.base_url, group_id)
    }

    pub fn create_plan_by_group_name(&self) -> String {
        format!("{}/plans/by-group-name", self.base_url)
    }
}

/// HTTP client for the trip-planning backend.
///
/// No retries: every failure is mapped to an [`ApiError`] and returned.
#[derive(Clone)]
pub struct HttpTripApi {
    client: Client,
    endpoints: ApiEndpoints,
}

impl HttpTripApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TripboardError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: ApiEndpoints::new(&config.base_url)?,
        })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        self.execute(self.client.get(url)).await
    }

    async fn post<B, T>(&self, url: String, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.client.post(url);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, url = %response.url(), "Backend response");

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ApiError::from_response(status, &text));
        }
        parse_body(status, &text)
    }
}

/// Parses a success body; an empty body is read as JSON `null`.
fn parse_body<T: DeserializeOwned>(status: u16, text: &str) -> ApiResult<T> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(|e| ApiError {
        code: Some(INVALID_RESPONSE.to_string()),
        ..ApiError::new(status, format!("Failed to parse response body: {}", e))
    })
}

#[async_trait]
impl TripApi for HttpTripApi {
    async fn create_user(&self, payload: &CreateUserPayload) -> ApiResult<UserResponse> {
        self.post(self.endpoints.create_user(), Some(payload)).await
    }

    async fn get_user_info(&self, email: &str) -> ApiResult<UserInfoResponse> {
        let request = self
            .client
            .get(self.endpoints.user_info())
            .query(&[("email", email)]);
        self.execute(request).await
    }

    async fn create_group(&self, payload: &CreateGroupPayload) -> ApiResult<GroupResponse> {
        self.post(self.endpoints.create_group(), Some(payload)).await
    }

    async fn add_member(
        &self,
        group_id: &str,
        payload: &AddMemberPayload,
    ) -> ApiResult<MemberResponse> {
        self.post(self.endpoints.add_member(group_id), Some(payload))
            .await
    }

    async fn get_group_traits(&self, group_id: &str) -> ApiResult<GroupTraitsResponse> {
        self.get(self.endpoints.group_traits(group_id)).await
    }

    async fn process_group(&self, group_id: &str) -> ApiResult<MessageResponse> {
        self.post::<(), _>(self.endpoints.process_group(group_id), None)
            .await
    }

    async fn get_recommendations(&self, group_id: &str) -> ApiResult<RecommendationsResponse> {
        self.get(self.endpoints.recommendations(group_id)).await
    }

    async fn create_plan_for_group(
        &self,
        group_id: &str,
        payload: &PlanCreatePayload,
    ) -> ApiResult<PlanResponse> {
        self.post(self.endpoints.create_plan_for_group(group_id), Some(payload))
            .await
    }

    async fn create_plan_by_group_name(
        &self,
        payload: &GeneratePlanByGroupNamePayload,
    ) -> ApiResult<PlanResponse> {
        self.post(self.endpoints.create_plan_by_group_name(), Some(payload))
            .await
    }
}
