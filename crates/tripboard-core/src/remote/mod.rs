//! Contract with the remote trip-planning backend.
//!
//! The store never talks to the network. Callers use a [`TripApi`]
//! implementation, handle any [`ApiError`], and hand the resulting plain data
//! to the store.
//!
//! # Module Structure
//!
//! - `client`: The [`TripApi`] trait
//! - `dto`: Request and response bodies
//! - `error`: [`ApiError`] and payload normalization

mod client;
mod dto;
mod error;

// Re-export public API
pub use client::TripApi;
pub use dto::{
    AddMemberPayload, CreateGroupPayload, CreateUserPayload, GeneratePlanByGroupNamePayload,
    GroupInfo, GroupMemberTraits, GroupResponse, GroupTraitsResponse, MemberResponse,
    MessageResponse, PlanCreatePayload, PlanResponse, RecommendationsResponse, UserInfoResponse,
    UserResponse,
};
pub use error::{ApiError, ApiResult, KNOWLEDGE_NOT_READY};
