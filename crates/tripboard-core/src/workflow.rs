//! Sign-in, survey and plan-generation flows.
//!
//! Each flow calls the backend through a [`TripApi`], handles the outcome,
//! and only then writes plain data into the [`AppStore`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::error::TripboardError;
use crate::group::{Group, GroupId};
use crate::plan::PlanOption;
use crate::remote::{
    AddMemberPayload, ApiError, ApiResult, CreateGroupPayload, CreateUserPayload,
    PlanCreatePayload, PlanResponse, TripApi,
};
use crate::store::AppStore;
use crate::user::{Persona, User};
use crate::whiteboard::WhiteboardPhase;

/// Name sent to the backend when the pending user has none.
const FALLBACK_SURVEY_NAME: &str = "Traveler";

/// Destination sent when a group is created without one.
const FALLBACK_DESTINATION: &str = "Planning in progress";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] TripboardError),
}

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Known user; the store now holds the user and their groups.
    Returning,
    /// Unknown email; a pending user was stored and must take the survey.
    NeedsSurvey,
    /// The email was blank; nothing happened.
    Skipped,
}

/// Looks the email up on the backend and installs the result in the store.
///
/// A 404 is not an error: it produces a pending user. Any other failure is
/// returned and leaves the store untouched.
pub async fn sign_in(
    api: &dyn TripApi,
    store: &mut AppStore,
    name: &str,
    email: &str,
) -> WorkflowResult<SignInOutcome> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Ok(SignInOutcome::Skipped);
    }

    match api.get_user_info(&email).await {
        Ok(info) => {
            store.hydrate_from_user_info(&info);
            Ok(SignInOutcome::Returning)
        }
        Err(e) if e.is_not_found() => {
            info!("Unknown email, starting survey onboarding");
            store.set_current_user(User::pending(name, &email));
            Ok(SignInOutcome::NeedsSurvey)
        }
        Err(e) => {
            warn!(status = e.status, error = %e, "Sign-in lookup failed");
            Err(e.into())
        }
    }
}

/// Submits the survey answers for the current user and stores the persona
/// the backend generated.
///
/// Returns `None` without calling the backend when nobody is signed in.
pub async fn complete_survey(
    api: &dyn TripApi,
    store: &mut AppStore,
    answers: &BTreeMap<String, String>,
) -> WorkflowResult<Option<Persona>> {
    let Some(user) = store.current_user() else {
        warn!("Survey submitted without a signed-in user");
        return Ok(None);
    };

    let name = if user.name.is_empty() {
        FALLBACK_SURVEY_NAME.to_string()
    } else {
        user.name.clone()
    };
    let answers: Map<String, Value> = answers
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    let mut user_answer = Map::new();
    user_answer.insert("answers".to_string(), Value::Object(answers));

    let payload = CreateUserPayload {
        email: user.email.clone(),
        name,
        user_answer,
    };
    let created = api.create_user(&payload).await?;

    let persona = Persona::from_backend(&created);
    store.finish_onboarding(persona.clone());
    Ok(Some(persona))
}

/// Creates a group on the backend for the signed-in user.
///
/// A local group is added and selected first, re-keyed under the backend id
/// once the backend accepts it, and removed again if the backend refuses.
/// The group list is then refreshed from the backend; a failed refresh only
/// logs, since the created group is already in the store.
///
/// Returns `None` without calling the backend when nobody is signed in or
/// the name is blank.
pub async fn create_group(
    api: &dyn TripApi,
    store: &mut AppStore,
    name: &str,
    destination: &str,
) -> WorkflowResult<Option<GroupId>> {
    let name = name.trim();
    let Some(user) = store.current_user().cloned() else {
        warn!("Group creation requested without a signed-in user");
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }

    let destination = match destination.trim() {
        "" => FALLBACK_DESTINATION,
        trimmed => trimmed,
    };
    let local = store.create_group(name, destination);

    let payload = CreateGroupPayload {
        group_name: name.to_string(),
        destination: destination.to_string(),
        creator_email: user.email.clone(),
    };
    let created = match api.create_group(&payload).await {
        Ok(created) => created,
        Err(e) => {
            warn!(group_name = name, error = %e, "Group creation failed");
            store.leave_group(&local.id);
            return Err(e.into());
        }
    };

    let group_id = store.adopt_remote_id(&local.id, created.id)?;
    refresh_groups(api, store, &user.email).await;
    Ok(Some(group_id))
}

/// Adds the signed-in user to the group named by `code` and selects it.
///
/// Nothing is stored when the backend refuses. Returns `None` without
/// calling the backend when nobody is signed in or the code is blank.
pub async fn join_group(
    api: &dyn TripApi,
    store: &mut AppStore,
    code: &str,
) -> WorkflowResult<Option<Group>> {
    let code = code.trim();
    let Some(user) = store.current_user().cloned() else {
        warn!("Group join requested without a signed-in user");
        return Ok(None);
    };
    if code.is_empty() {
        return Ok(None);
    }

    let payload = AddMemberPayload {
        user_email: user.email.clone(),
    };
    api.add_member(code, &payload).await?;

    let placeholder = store.join_group_by_code(code);
    refresh_groups(api, store, &user.email).await;

    let joined = store.group(&placeholder.id).cloned().unwrap_or(placeholder);
    store.select_group(Some(joined.id.clone()));
    info!(group_id = %joined.id, "Joined group");
    Ok(Some(joined))
}

/// Reloads the user's groups from the backend, keeping the store as is on
/// failure.
async fn refresh_groups(api: &dyn TripApi, store: &mut AppStore, email: &str) {
    match api.get_user_info(email).await {
        Ok(info) => store.hydrate_from_user_info(&info),
        Err(e) => warn!(error = %e, "Group refresh failed, keeping local groups"),
    }
}

/// Fetches recommendations, generates plans from them and caches the
/// resulting options, driving the group's whiteboard phase along the way.
///
/// When the backend reports that the group's knowledge is not built yet, the
/// group is processed and generation is retried once. On a failed generation
/// the phase falls back to `plan_options` when older options are still
/// cached, and to `recommendations` otherwise.
pub async fn generate_plans(
    api: &dyn TripApi,
    store: &mut AppStore,
    group_id: &GroupId,
) -> WorkflowResult<Vec<PlanOption>> {
    if store.group(group_id).is_none() {
        return Err(TripboardError::unknown_group(group_id.as_str()).into());
    }

    let had_plans = store.whiteboard_phase(group_id).has_plans();
    let recommendations = api.get_recommendations(group_id.as_str()).await?;

    if !had_plans {
        store.set_whiteboard_state(group_id, WhiteboardPhase::Recommendations)?;
    }
    store.set_whiteboard_state(group_id, WhiteboardPhase::PlansGenerating)?;

    let payload = PlanCreatePayload::from_recommendations(&recommendations);
    let plan = match request_plan(api, group_id, &payload).await {
        Ok(plan) => plan,
        Err(e) => {
            warn!(group_id = %group_id, error = %e, "Plan generation failed");
            let fallback = if had_plans && !store.plan_options(group_id).is_empty() {
                WhiteboardPhase::PlanOptions
            } else {
                WhiteboardPhase::Recommendations
            };
            // The group may have been left while the request was in flight.
            if let Err(store_err) = store.set_whiteboard_state(group_id, fallback) {
                warn!(group_id = %group_id, error = %store_err, "Could not restore whiteboard phase");
            }
            return Err(e.into());
        }
    };

    let options = plan.plan_options();
    store.set_plan_options_for_group(group_id, options.clone())?;
    store.set_whiteboard_state(group_id, WhiteboardPhase::PlanOptions)?;
    info!(group_id = %group_id, count = options.len(), "Generated plan options");
    Ok(options)
}

async fn request_plan(
    api: &dyn TripApi,
    group_id: &GroupId,
    payload: &PlanCreatePayload,
) -> ApiResult<PlanResponse> {
    match api.create_plan_for_group(group_id.as_str(), payload).await {
        Err(e) if e.is_knowledge_not_ready() => {
            info!(group_id = %group_id, error = %e, "Group knowledge not ready, processing before retry");
            api.process_group(group_id.as_str()).await?;
            api.create_plan_for_group(group_id.as_str(), payload).await
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;
    use crate::remote::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Backend double with canned responses; unused calls fail with 501.
    ///
    /// Plan results are handed out in order, and the last one repeats.
    struct StubApi {
        user_info: ApiResult<UserInfoResponse>,
        created_user: ApiResult<UserResponse>,
        created_group: ApiResult<GroupResponse>,
        member: ApiResult<MemberResponse>,
        processed: ApiResult<MessageResponse>,
        plans: Mutex<VecDeque<ApiResult<PlanResponse>>>,
        last_create_user: Mutex<Option<CreateUserPayload>>,
        last_create_group: Mutex<Option<CreateGroupPayload>>,
        last_add_member: Mutex<Option<(String, AddMemberPayload)>>,
        process_calls: Mutex<u32>,
        plan_calls: Mutex<u32>,
    }

    impl StubApi {
        fn new() -> Self {
            Self {
                user_info: unused(),
                created_user: unused(),
                created_group: unused(),
                member: unused(),
                processed: Ok(MessageResponse {
                    message: "processed".to_string(),
                }),
                plans: Mutex::new(VecDeque::from([unused()])),
                last_create_user: Mutex::new(None),
                last_create_group: Mutex::new(None),
                last_add_member: Mutex::new(None),
                process_calls: Mutex::new(0),
                plan_calls: Mutex::new(0),
            }
        }

        fn set_plans(&self, results: Vec<ApiResult<PlanResponse>>) {
            *self.plans.lock().unwrap() = results.into();
        }
    }

    fn unused<T>() -> ApiResult<T> {
        Err(ApiError::new(501, "unused"))
    }

    #[async_trait]
    impl TripApi for StubApi {
        async fn create_user(&self, payload: &CreateUserPayload) -> ApiResult<UserResponse> {
            *self.last_create_user.lock().unwrap() = Some(payload.clone());
            self.created_user.clone()
        }

        async fn get_user_info(&self, _email: &str) -> ApiResult<UserInfoResponse> {
            self.user_info.clone()
        }

        async fn create_group(&self, payload: &CreateGroupPayload) -> ApiResult<GroupResponse> {
            *self.last_create_group.lock().unwrap() = Some(payload.clone());
            self.created_group.clone()
        }

        async fn add_member(
            &self,
            group_id: &str,
            payload: &AddMemberPayload,
        ) -> ApiResult<MemberResponse> {
            *self.last_add_member.lock().unwrap() = Some((group_id.to_string(), payload.clone()));
            self.member.clone()
        }

        async fn get_group_traits(&self, _group_id: &str) -> ApiResult<GroupTraitsResponse> {
            unused()
        }

        async fn process_group(&self, _group_id: &str) -> ApiResult<MessageResponse> {
            *self.process_calls.lock().unwrap() += 1;
            self.processed.clone()
        }

        async fn get_recommendations(&self, _group_id: &str) -> ApiResult<RecommendationsResponse> {
            Ok(RecommendationsResponse::default())
        }

        async fn create_plan_for_group(
            &self,
            _group_id: &str,
            _payload: &PlanCreatePayload,
        ) -> ApiResult<PlanResponse> {
            *self.plan_calls.lock().unwrap() += 1;
            let mut plans = self.plans.lock().unwrap();
            if plans.len() > 1 {
                plans.pop_front().unwrap()
            } else {
                plans.front().cloned().unwrap()
            }
        }

        async fn create_plan_by_group_name(
            &self,
            _payload: &GeneratePlanByGroupNamePayload,
        ) -> ApiResult<PlanResponse> {
            unused()
        }
    }

    fn user_response(summary: &str) -> UserResponse {
        UserResponse {
            id: "u-1".to_string(),
            email: "ann@x.com".to_string(),
            name: "Ann".to_string(),
            persona_traits: Map::new(),
            ai_summary: summary.to_string(),
        }
    }

    fn plan_with(ids: &[&str]) -> PlanResponse {
        let options: Vec<Value> = ids
            .iter()
            .map(|id| json!({"plan_id": id, "plan_type": "out_of_city", "plan_variant": "v"}))
            .collect();
        PlanResponse {
            id: "plan-1".to_string(),
            group_id: "g-1".to_string(),
            plan_json: json!({"plan_options": options}),
            summary_caption: String::new(),
            estimated_cost_per_person: Some(120.0),
        }
    }

    fn knowledge_not_ready() -> ApiError {
        ApiError::from_response(
            409,
            r#"{"detail": {"code": "KN_NOT_READY", "message": "not ready"}}"#,
        )
    }

    fn group_info(id: &str, name: &str) -> GroupInfo {
        serde_json::from_value(json!({"id": id, "name": name, "destination": "Goa"})).unwrap()
    }

    fn signed_in_store() -> AppStore {
        let mut store = AppStore::in_memory();
        store.set_current_user(User::from_backend(&user_response("")));
        store
    }

    fn store_with_group() -> (AppStore, GroupId) {
        let mut store = AppStore::in_memory();
        let id = GroupId::remote("g-1");
        store.sync_groups(vec![Group::new(id.clone(), "Crew", "Goa")]);
        (store, id)
    }

    #[tokio::test]
    async fn test_sign_in_returning_user() {
        let mut api = StubApi::new();
        api.user_info = Ok(UserInfoResponse {
            user: user_response("Coffee first"),
            groups: Vec::new(),
        });
        let mut store = AppStore::in_memory();

        let outcome = sign_in(&api, &mut store, "Ann", " ANN@x.com ").await.unwrap();

        assert_eq!(outcome, SignInOutcome::Returning);
        assert_eq!(store.current_user().unwrap().is_new, Some(false));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email_creates_pending_user() {
        let mut api = StubApi::new();
        api.user_info = Err(ApiError::from_response(404, r#"{"detail": "User not found"}"#));
        let mut store = AppStore::in_memory();

        let outcome = sign_in(&api, &mut store, "", "New@Example.com").await.unwrap();

        assert_eq!(outcome, SignInOutcome::NeedsSurvey);
        let user = store.current_user().unwrap();
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.name, "new");
        assert!(user.needs_onboarding());
    }

    #[tokio::test]
    async fn test_sign_in_failure_leaves_store_untouched() {
        let mut api = StubApi::new();
        api.user_info = Err(ApiError::from_response(500, "boom"));
        let mut store = AppStore::in_memory();

        let err = sign_in(&api, &mut store, "Ann", "ann@x.com").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ref e) if e.status == 500));
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_blank_email_is_skipped() {
        let api = StubApi::new();
        let mut store = AppStore::in_memory();
        let outcome = sign_in(&api, &mut store, "Ann", "   ").await.unwrap();
        assert_eq!(outcome, SignInOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_complete_survey_attaches_persona() {
        let mut api = StubApi::new();
        api.created_user = Ok(user_response("Beaches and seafood"));
        let mut store = AppStore::in_memory();
        store.set_current_user(User::pending("Ann", "ann@x.com"));
        let answers = BTreeMap::from([("1".to_string(), "Beaches".to_string())]);

        let persona = complete_survey(&api, &mut store, &answers)
            .await
            .unwrap()
            .expect("persona");

        assert_eq!(persona.summary, "Beaches and seafood");
        let user = store.current_user().unwrap();
        assert_eq!(user.is_new, Some(false));
        assert_eq!(user.persona.as_ref(), Some(&persona));

        let sent = api.last_create_user.lock().unwrap().clone().unwrap();
        assert_eq!(sent.email, "ann@x.com");
        assert_eq!(Value::Object(sent.user_answer), json!({"answers": {"1": "Beaches"}}));
    }

    #[tokio::test]
    async fn test_complete_survey_without_user() {
        let api = StubApi::new();
        let mut store = AppStore::in_memory();
        let result = complete_survey(&api, &mut store, &BTreeMap::new()).await.unwrap();
        assert!(result.is_none());
        assert!(api.last_create_user.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generate_plans_caches_options() {
        let api = StubApi::new();
        api.set_plans(vec![Ok(plan_with(&["a", "b"]))]);
        let (mut store, id) = store_with_group();

        let options = generate_plans(&api, &mut store, &id).await.unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(store.plan_options(&id).len(), 2);
        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::PlanOptions);
    }

    #[tokio::test]
    async fn test_generate_plans_failure_falls_back_to_recommendations() {
        let api = StubApi::new();
        api.set_plans(vec![Err(knowledge_not_ready())]);
        let (mut store, id) = store_with_group();

        let err = generate_plans(&api, &mut store, &id).await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ref e) if e.is_knowledge_not_ready()));
        assert_eq!(*api.process_calls.lock().unwrap(), 1);
        assert_eq!(*api.plan_calls.lock().unwrap(), 2);
        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::Recommendations);
    }

    #[tokio::test]
    async fn test_regeneration_failure_keeps_previous_options() {
        let api = StubApi::new();
        api.set_plans(vec![Ok(plan_with(&["a"]))]);
        let (mut store, id) = store_with_group();
        generate_plans(&api, &mut store, &id).await.unwrap();

        api.set_plans(vec![Err(ApiError::new(503, "busy"))]);
        generate_plans(&api, &mut store, &id).await.unwrap_err();

        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::PlanOptions);
        assert_eq!(store.plan_options(&id)[0].plan_id, "a");
    }

    #[tokio::test]
    async fn test_generate_plans_for_unknown_group() {
        let api = StubApi::new();
        let mut store = AppStore::in_memory();
        let err = generate_plans(&api, &mut store, &GroupId::remote("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Store(ref e) if e.is_unknown_group()));
    }
    #[tokio::test]
    async fn test_generate_plans_processes_group_and_retries() {
        let api = StubApi::new();
        api.set_plans(vec![Err(knowledge_not_ready()), Ok(plan_with(&["a", "b"]))]);
        let (mut store, id) = store_with_group();

        let options = generate_plans(&api, &mut store, &id).await.unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(*api.process_calls.lock().unwrap(), 1);
        assert_eq!(*api.plan_calls.lock().unwrap(), 2);
        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::PlanOptions);
    }

    #[tokio::test]
    async fn test_other_plan_failures_are_not_retried() {
        let api = StubApi::new();
        api.set_plans(vec![Err(ApiError::new(503, "busy")), Ok(plan_with(&["a"]))]);
        let (mut store, id) = store_with_group();

        generate_plans(&api, &mut store, &id).await.unwrap_err();

        assert_eq!(*api.process_calls.lock().unwrap(), 0);
        assert_eq!(*api.plan_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_processing_skips_retry() {
        let mut api = StubApi::new();
        api.processed = Err(ApiError::new(500, "process failed"));
        api.set_plans(vec![Err(knowledge_not_ready()), Ok(plan_with(&["a"]))]);
        let (mut store, id) = store_with_group();

        let err = generate_plans(&api, &mut store, &id).await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ref e) if e.status == 500));
        assert_eq!(*api.plan_calls.lock().unwrap(), 1);
        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::Recommendations);
    }

    #[tokio::test]
    async fn test_create_group_adopts_backend_id_and_refreshes() {
        let mut api = StubApi::new();
        api.created_group = Ok(GroupResponse {
            id: "g-9".to_string(),
            name: "Crew".to_string(),
            creator_id: "u-1".to_string(),
            destination: "Planning in progress".to_string(),
        });
        api.user_info = Ok(UserInfoResponse {
            user: user_response(""),
            groups: vec![group_info("g-1", "Old crew"), group_info("g-9", "Crew")],
        });
        let mut store = signed_in_store();

        let id = create_group(&api, &mut store, "  Crew ", "  ")
            .await
            .unwrap()
            .expect("group id");

        assert_eq!(id, GroupId::remote("g-9"));
        assert_eq!(store.selected_group_id(), Some(&id));
        assert_eq!(store.groups().len(), 2);
        assert!(store.groups().iter().all(|g| !g.id.is_local()));

        let sent = api.last_create_group.lock().unwrap().clone().unwrap();
        assert_eq!(sent.group_name, "Crew");
        assert_eq!(sent.destination, FALLBACK_DESTINATION);
        assert_eq!(sent.creator_email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_create_group_keeps_group_when_refresh_fails() {
        let mut api = StubApi::new();
        api.created_group = Ok(GroupResponse {
            id: "g-9".to_string(),
            name: "Crew".to_string(),
            creator_id: "u-1".to_string(),
            destination: "Goa".to_string(),
        });
        let mut store = signed_in_store();

        let id = create_group(&api, &mut store, "Crew", "Goa").await.unwrap().unwrap();

        assert_eq!(store.group(&id).unwrap().destination_label, "Goa");
        assert_eq!(store.whiteboard_phase(&id), WhiteboardPhase::Gathering);
    }

    #[tokio::test]
    async fn test_create_group_rejected_leaves_no_group() {
        let mut api = StubApi::new();
        api.created_group = Err(ApiError::new(422, "invalid"));
        let mut store = signed_in_store();

        let err = create_group(&api, &mut store, "Crew", "Goa").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ref e) if e.status == 422));
        assert!(store.groups().is_empty());
        assert!(store.selected_group_id().is_none());
    }

    #[tokio::test]
    async fn test_create_group_without_user() {
        let api = StubApi::new();
        let mut store = AppStore::in_memory();
        assert!(create_group(&api, &mut store, "Crew", "Goa").await.unwrap().is_none());
        assert!(api.last_create_group.lock().unwrap().is_none());
        assert!(store.groups().is_empty());
    }

    #[tokio::test]
    async fn test_join_group_adds_member_and_selects_group() {
        let mut api = StubApi::new();
        api.member = Ok(MemberResponse {
            group_id: "g-7".to_string(),
            user_id: "u-1".to_string(),
            role: "member".to_string(),
        });
        api.user_info = Ok(UserInfoResponse {
            user: user_response(""),
            groups: vec![group_info("g-1", "Old crew"), group_info("g-7", "Beach crew")],
        });
        let mut store = signed_in_store();

        let joined = join_group(&api, &mut store, " g-7 ").await.unwrap().expect("group");

        assert_eq!(joined.id, GroupId::remote("g-7"));
        assert_eq!(joined.name, "Beach crew");
        assert_eq!(store.selected_group_id(), Some(&joined.id));

        let (code, payload) = api.last_add_member.lock().unwrap().clone().unwrap();
        assert_eq!(code, "g-7");
        assert_eq!(payload.user_email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_join_group_rejected_stores_nothing() {
        let mut api = StubApi::new();
        api.member = Err(ApiError::from_response(404, r#"{"detail": "Group not found"}"#));
        let mut store = signed_in_store();

        let err = join_group(&api, &mut store, "nope").await.unwrap_err();

        assert!(matches!(err, WorkflowError::Api(ref e) if e.is_not_found()));
        assert!(store.groups().is_empty());
    }
}
