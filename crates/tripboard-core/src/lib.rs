//! Client-side core of the Tripboard group trip planner.
//!
//! The centerpiece is [`AppStore`], an explicitly constructed state container
//! for the signed-in user, their groups, and each group's whiteboard phase and
//! plan cache. Everything network-related goes through the [`remote::TripApi`]
//! contract and never touches the store directly.

pub mod config;
pub mod error;
pub mod group;
pub mod plan;
pub mod remote;
pub mod state;
pub mod store;
pub mod user;
pub mod whiteboard;
pub mod workflow;

// Re-export common types
pub use error::{Result, TripboardError};
pub use store::AppStore;
pub use whiteboard::WhiteboardPhase;
