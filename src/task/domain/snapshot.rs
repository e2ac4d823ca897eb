//! Whole-store snapshot exchanged with persistence adapters.

use super::{Task, TaskId};
use std::collections::HashSet;

/// Complete store state: every task plus the next identifier to assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Identifier the store will assign to the next added task.
    pub next_id: TaskId,
}

impl Default for TaskSnapshot {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }
}

impl TaskSnapshot {
    /// Checks that identifiers are unique and all lie below `next_id`.
    ///
    /// Returns a description of the first inconsistency found.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if task.id() >= self.next_id {
                return Err(format!(
                    "task id {} is not below next id {}",
                    task.id(),
                    self.next_id
                ));
            }
            if !seen.insert(task.id()) {
                return Err(format!("duplicate task id {}", task.id()));
            }
        }
        Ok(())
    }
}
