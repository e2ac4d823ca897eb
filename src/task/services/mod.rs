//! Application services for task management.

mod store;

pub use store::{CorruptStatePolicy, TaskStore, TaskStoreResult};
