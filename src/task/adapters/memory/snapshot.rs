//! In-memory snapshot store for the non-persistent posture and tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TaskSnapshot,
    ports::{SnapshotError, SnapshotResult, TaskSnapshotStore},
};

/// Snapshot store that keeps the last saved snapshot in memory.
///
/// Clones share the same underlying state, so a test can keep a handle and
/// observe what was saved through another.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<Option<TaskSnapshot>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory snapshot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: TaskSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(snapshot))),
        }
    }
}

impl TaskSnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> SnapshotResult<Option<TaskSnapshot>> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotError::io(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }

    fn save(&self, snapshot: &TaskSnapshot) -> SnapshotResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotError::io(std::io::Error::other(err.to_string())))?;
        *state = Some(snapshot.clone());
        Ok(())
    }
}
