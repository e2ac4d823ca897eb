//! Domain model for task management.
//!
//! The task domain owns identity, field validation and the snapshot shape
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod policy;
mod snapshot;
mod task;

pub use error::TaskValidationError;
pub use ids::TaskId;
pub use policy::TaskPolicy;
pub use snapshot::TaskSnapshot;
pub use task::{PersistedTaskData, Task};
