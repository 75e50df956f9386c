//! Persisted application state.
//!
//! - `model`: [`PersistedState`], the subset of the store that survives restarts
//! - `repository`: The [`StateRepository`] persistence seam

pub mod model;
pub mod repository;

pub use model::{PersistedState, STORE_NAMESPACE};
pub use repository::{InMemoryStateRepository, StateRepository};
