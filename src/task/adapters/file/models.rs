//! Serde document models for the JSON snapshot file.

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPolicy, TaskSnapshot},
    ports::SnapshotError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Task records in insertion order.
    pub tasks: Vec<TaskRecord>,
    /// Next identifier to assign.
    pub next_id: u64,
}

/// Stored task record.
///
/// `description` and `created_at` are optional so that files written
/// without them still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: u64,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl SnapshotDocument {
    /// Builds a document from a store snapshot.
    pub fn from_snapshot(snapshot: &TaskSnapshot) -> Self {
        Self {
            tasks: snapshot.tasks.iter().map(TaskRecord::from_task).collect(),
            next_id: snapshot.next_id.value(),
        }
    }

    /// Converts the document back into a snapshot.
    ///
    /// Records are checked for structural invariants only (positive id,
    /// non-blank title); length caps govern new input, not stored data.
    /// Records without a timestamp are stamped with `loaded_at`.
    pub fn into_snapshot(self, loaded_at: DateTime<Utc>) -> Result<TaskSnapshot, SnapshotError> {
        let next_id = TaskId::new(self.next_id).map_err(SnapshotError::corrupt)?;
        let tasks = self
            .tasks
            .into_iter()
            .map(|record| record.into_task(loaded_at))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TaskSnapshot { tasks, next_id })
    }
}

impl TaskRecord {
    fn from_task(task: &Task) -> Self {
        let data = task.to_persisted();
        Self {
            id: data.id.value(),
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: Some(data.created_at),
        }
    }

    fn into_task(self, loaded_at: DateTime<Utc>) -> Result<Task, SnapshotError> {
        let id = TaskId::new(self.id).map_err(SnapshotError::corrupt)?;
        let data = PersistedTaskData {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at.unwrap_or(loaded_at),
        };
        Task::from_persisted(data, &TaskPolicy::lenient())
            .map_err(|err| SnapshotError::Corrupt(format!("task {id}: {err}")))
    }
}
