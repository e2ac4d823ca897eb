//! In-memory snapshot adapter.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;
