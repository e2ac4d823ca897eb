//! Identifier type for the task domain.

use super::TaskValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive identifier assigned to a task by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// The identifier handed out to the first task of an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::InvalidId`] when the value is zero.
    pub fn new(value: u64) -> Result<Self, TaskValidationError> {
        if value == 0 {
            return Err(TaskValidationError::InvalidId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one, or `None` once the
    /// numeric range is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl TryFrom<u64> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl FromStr for TaskId {
    type Err = TaskValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<u64>()
            .map_err(|_| TaskValidationError::InvalidId(trimmed.to_owned()))?;
        Self::new(parsed)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
