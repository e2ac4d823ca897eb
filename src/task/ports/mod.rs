//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod snapshot;

pub use snapshot::{SnapshotError, SnapshotResult, TaskSnapshotStore};

#[cfg(test)]
pub use snapshot::MockTaskSnapshotStore;
