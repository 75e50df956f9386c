//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: The signed-in [`User`] record
//! - `persona`: The survey-derived travel [`Persona`]

mod model;
mod persona;

// Re-export public API
pub use model::{User, DEFAULT_DISPLAY_NAME};
pub use persona::Persona;
