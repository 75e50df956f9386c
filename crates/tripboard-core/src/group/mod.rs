//! Group domain module.
//!
//! A group is a set of users collaborating on one trip. Groups are either
//! created optimistically on the client or loaded from the backend, and the
//! [`GroupId`] keeps those two id namespaces apart.

mod model;

// Re-export public API
pub use model::{Group, GroupId, GroupStatus, Member, Presence, LOCAL_ID_PREFIX};
