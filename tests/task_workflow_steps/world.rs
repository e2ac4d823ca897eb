//! Shared world state for task workflow BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use tasklist::task::{
    domain::{Task, TaskPolicy, TaskValidationError},
    services::TaskStore,
};

/// Scenario world for task workflow behaviour tests.
pub struct TaskWorkflowWorld {
    pub store: TaskStore<DefaultClock>,
    pub last_added: Option<Task>,
    pub last_add_result: Option<Result<Task, TaskValidationError>>,
}

impl TaskWorkflowWorld {
    /// Creates a world with an empty strict store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: TaskStore::new(TaskPolicy::strict(), DefaultClock),
            last_added: None,
            last_add_result: None,
        }
    }

    /// Returns the most recently added task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been added in this scenario.
    pub fn last_added(&self) -> Result<&Task, eyre::Report> {
        self.last_added
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no task has been added in this scenario"))
    }
}

impl Default for TaskWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorkflowWorld {
    TaskWorkflowWorld::default()
}
