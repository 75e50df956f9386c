//! Infrastructure for the Tripboard client core: durable state storage,
//! configuration loading, the HTTP backend client and logging setup.

pub mod config_service;
pub mod http_api;
pub mod paths;
pub mod state_repository;
pub mod storage;
pub mod telemetry;

pub use crate::config_service::ConfigService;
pub use crate::http_api::{ApiEndpoints, HttpTripApi};
pub use crate::paths::TripboardPaths;
pub use crate::state_repository::FileStateRepository;
