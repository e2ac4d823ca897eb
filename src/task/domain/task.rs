//! Task entity and its persisted representation.

use super::{TaskId, TaskPolicy, TaskValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A single to-do item.
///
/// Tasks are created by [`crate::task::services::TaskStore::add`], which
/// assigns the identifier. Field mutation is restricted to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    pub(crate) fn new(
        id: TaskId,
        title: &str,
        description: Option<String>,
        policy: &TaskPolicy,
        clock: &impl Clock,
    ) -> Result<Self, TaskValidationError> {
        let normalized_title = policy.validate_title(title)?;
        if let Some(text) = description.as_deref() {
            policy.validate_description(text)?;
        }

        Ok(Self {
            id,
            title: normalized_title,
            description,
            completed: false,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a task from persisted storage, re-validating its fields
    /// against `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the persisted title or
    /// description violates the policy.
    pub fn from_persisted(
        data: PersistedTaskData,
        policy: &TaskPolicy,
    ) -> Result<Self, TaskValidationError> {
        let title = policy.validate_title(&data.title)?;
        if let Some(text) = data.description.as_deref() {
            policy.validate_description(text)?;
        }

        Ok(Self {
            id: data.id,
            title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the persisted representation of this task.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedTaskData {
        PersistedTaskData {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
            created_at: self.created_at,
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub(crate) const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
