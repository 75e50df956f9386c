//! File-backed state repository.

use std::path::{Path, PathBuf};

use tracing::debug;
use tripboard_core::config::StorageConfig;
use tripboard_core::error::Result;
use tripboard_core::state::{PersistedState, StateRepository};

use crate::paths::TripboardPaths;
use crate::storage::AtomicJsonFile;

/// Stores [`PersistedState`] as a single JSON file named after the store
/// namespace.
pub struct FileStateRepository {
    file: AtomicJsonFile<PersistedState>,
}

impl FileStateRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Resolves the state file location from the storage configuration.
    pub fn from_config(storage: &StorageConfig) -> Result<Self> {
        Ok(Self::new(TripboardPaths::state_file(storage)?))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl StateRepository for FileStateRepository {
    fn load_state(&self) -> Result<Option<PersistedState>> {
        let state = self.file.load()?;
        debug!(path = %self.path().display(), found = state.is_some(), "Loaded state file");
        Ok(state)
    }

    fn save_state(&self, state: &PersistedState) -> Result<()> {
        self.file.save(state)
    }
}
