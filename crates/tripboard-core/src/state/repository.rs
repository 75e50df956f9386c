//! State repository trait.

use std::sync::Mutex;

use crate::error::{Result, TripboardError};
use crate::state::model::PersistedState;

/// Durable storage for the persisted subset of the store.
///
/// Calls are synchronous: the store invokes them from inside its actions.
pub trait StateRepository: Send + Sync {
    /// Loads the persisted state. `Ok(None)` means nothing has been stored yet.
    fn load_state(&self) -> Result<Option<PersistedState>>;

    /// Replaces the persisted state.
    fn save_state(&self, state: &PersistedState) -> Result<()>;
}

/// Repository that keeps the serialized JSON in memory.
///
/// State still goes through serde on every save and load, so a fresh store
/// built on the same repository observes exactly what a file would hold.
#[derive(Debug, Default)]
pub struct InMemoryStateRepository {
    entry: Mutex<Option<String>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.entry.lock().ok().and_then(|entry| entry.clone())
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load_state(&self) -> Result<Option<PersistedState>> {
        let entry = self
            .entry
            .lock()
            .map_err(|e| TripboardError::internal(format!("State lock poisoned: {}", e)))?;

        match entry.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save_state(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        let mut entry = self
            .entry
            .lock()
            .map_err(|e| TripboardError::internal(format!("State lock poisoned: {}", e)))?;
        *entry = Some(json);
        Ok(())
    }
}
