//! Snapshot adapters for task persistence.
//!
//! - [`memory::InMemorySnapshotStore`]: process-lifetime state with no file
//!   I/O
//! - [`file::JsonFileSnapshotStore`]: whole-file JSON snapshots on disk

pub mod file;
pub mod memory;
