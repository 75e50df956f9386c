//! Plan domain module: generated itinerary options and their parts.

mod model;

// Re-export public API
pub use model::{Activity, DaySchedule, PlanOption, PlanSource, PlanType};
