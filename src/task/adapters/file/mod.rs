//! JSON file snapshot adapter.

mod models;
mod snapshot;

pub use snapshot::{DEFAULT_DATA_FILE, JsonFileSnapshotStore};
