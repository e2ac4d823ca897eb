//! Snapshot port for whole-store persistence.

use crate::task::domain::TaskSnapshot;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persistence contract for store snapshots.
///
/// Implementations overwrite the previous snapshot wholesale on every save.
/// No incremental or atomic write is implied.
#[cfg_attr(test, mockall::automock)]
pub trait TaskSnapshotStore {
    /// Loads the last saved snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Corrupt`] when saved content cannot be
    /// decoded into a consistent snapshot, or [`SnapshotError::Io`] when the
    /// backing storage cannot be read.
    fn load(&self) -> SnapshotResult<Option<TaskSnapshot>>;

    /// Replaces the saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot cannot be encoded or
    /// written.
    fn save(&self, snapshot: &TaskSnapshot) -> SnapshotResult<()>;
}

/// Errors returned by snapshot adapters.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// Saved state is malformed or internally inconsistent.
    #[error("corrupt task state: {0}")]
    Corrupt(String),

    /// Storage failure.
    #[error("task state i/o error: {0}")]
    Io(Arc<std::io::Error>),
}

impl SnapshotError {
    /// Wraps a storage error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Builds a corruption error from any displayable cause.
    pub fn corrupt(cause: impl std::fmt::Display) -> Self {
        Self::Corrupt(cause.to_string())
    }
}
