//! Task store: owner of the task collection and the identifier counter.

use crate::task::{
    domain::{Task, TaskId, TaskPolicy, TaskSnapshot, TaskValidationError},
    ports::{SnapshotError, SnapshotResult, TaskSnapshotStore},
};
use mockable::Clock;
use tracing::{debug, info};

/// Result type for store operations that validate input.
pub type TaskStoreResult<T> = Result<T, TaskValidationError>;

/// What to do when saved state turns out to be corrupt on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptStatePolicy {
    /// Discard the saved state and start with an empty store.
    #[default]
    StartFresh,
    /// Surface [`SnapshotError::Corrupt`] to the caller.
    Fail,
}

/// In-process task store.
///
/// Tasks are kept in insertion order and looked up linearly. Identifiers
/// come from a counter that starts at 1 and only ever grows, so an
/// identifier is never reused after its task is deleted.
#[derive(Debug, Clone)]
pub struct TaskStore<C>
where
    C: Clock,
{
    tasks: Vec<Task>,
    next_id: TaskId,
    policy: TaskPolicy,
    clock: C,
}

impl<C> TaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store whose counter starts at 1.
    #[must_use]
    pub const fn new(policy: TaskPolicy, clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
            policy,
            clock,
        }
    }

    /// Restores a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Corrupt`] when snapshot identifiers are
    /// duplicated or not below the snapshot's next identifier.
    pub fn from_snapshot(
        snapshot: TaskSnapshot,
        policy: TaskPolicy,
        clock: C,
    ) -> SnapshotResult<Self> {
        snapshot
            .check_consistency()
            .map_err(SnapshotError::Corrupt)?;
        Ok(Self {
            tasks: snapshot.tasks,
            next_id: snapshot.next_id,
            policy,
            clock,
        })
    }

    /// Opens a store from the state saved in `snapshots`.
    ///
    /// Missing state yields an empty store. Corrupt state is handled
    /// according to `on_corrupt`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] when the saved state cannot be read, and
    /// [`SnapshotError::Corrupt`] when it is corrupt and `on_corrupt` is
    /// [`CorruptStatePolicy::Fail`].
    pub fn open<S>(
        snapshots: &S,
        policy: TaskPolicy,
        on_corrupt: CorruptStatePolicy,
        clock: C,
    ) -> SnapshotResult<Self>
    where
        S: TaskSnapshotStore + ?Sized,
    {
        let restored = match snapshots.load() {
            Ok(Some(snapshot)) => snapshot
                .check_consistency()
                .map(|()| Some(snapshot))
                .map_err(SnapshotError::Corrupt),
            other => other,
        };

        match restored {
            Ok(Some(snapshot)) => Ok(Self {
                tasks: snapshot.tasks,
                next_id: snapshot.next_id,
                policy,
                clock,
            }),
            Ok(None) => Ok(Self::new(policy, clock)),
            Err(SnapshotError::Corrupt(reason))
                if on_corrupt == CorruptStatePolicy::StartFresh =>
            {
                info!(%reason, "discarding corrupt task state and starting empty");
                Ok(Self::new(policy, clock))
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the active validation policy.
    #[must_use]
    pub const fn policy(&self) -> &TaskPolicy {
        &self.policy
    }

    /// Returns the identifier the next successful add will assign.
    #[must_use]
    pub const fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Adds a task with a trimmed title and optional description.
    ///
    /// The counter advances only when validation succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the title is blank, either
    /// field exceeds the policy's cap, or no identifiers are left.
    pub fn add(&mut self, title: &str, description: Option<&str>) -> TaskStoreResult<Task> {
        let following = self
            .next_id
            .next()
            .ok_or(TaskValidationError::IdsExhausted)?;
        let task = Task::new(
            self.next_id,
            title,
            description.map(str::to_owned),
            &self.policy,
            &self.clock,
        )?;
        self.next_id = following;
        self.tasks.push(task.clone());
        debug!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Returns every task in insertion order, oldest first.
    ///
    /// The returned tasks are copies; changing them does not affect the store.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns the task with `id`, or `None` when there is no such task.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.find(id).cloned()
    }

    /// Replaces the supplied fields of task `id`, leaving the others as they
    /// are.
    ///
    /// All supplied fields are validated before anything is changed.
    /// Returns whether the task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when a supplied field is invalid,
    /// whether or not the task exists.
    pub fn update(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> TaskStoreResult<bool> {
        let new_title = title
            .map(|value| self.policy.validate_title(value))
            .transpose()?;
        if let Some(value) = description {
            self.policy.validate_description(value)?;
        }

        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        if let Some(value) = new_title {
            task.set_title(value);
        }
        if let Some(value) = description {
            task.set_description(value.to_owned());
        }
        debug!(task_id = %id, "task updated");
        Ok(true)
    }

    /// Removes task `id`. Returns whether it existed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            return false;
        };
        self.tasks.remove(position);
        debug!(task_id = %id, "task deleted");
        true
    }

    /// Flips the completion flag of task `id`. Returns whether it exists.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        let completed = !task.is_completed();
        task.set_completed(completed);
        debug!(task_id = %id, completed, "task completion toggled");
        true
    }

    /// Marks task `id` as completed. Returns whether it exists.
    pub fn mark_complete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, true)
    }

    /// Marks task `id` as not completed. Returns whether it exists.
    pub fn mark_incomplete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, false)
    }

    /// Returns the number of tasks currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Captures the full store state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            tasks: self.tasks.clone(),
            next_id: self.next_id,
        }
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        task.set_completed(completed);
        debug!(task_id = %id, completed, "task completion set");
        true
    }

    fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}
