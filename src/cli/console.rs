//! Presentation adapter turning store results into user-facing text.

use crate::task::{
    domain::{Task, TaskId, TaskValidationError},
    ports::{SnapshotError, TaskSnapshotStore},
    services::TaskStore,
};
use mockable::Clock;
use std::fmt::Display;
use std::io::{self, Write};
use thiserror::Error;
use tracing::warn;

/// Result of a console operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation was applied.
    Done,
    /// No task matched the requested identifier.
    NotFound,
}

/// Errors surfaced by console operations.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// User input failed validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// The snapshot could not be saved after a mutation.
    #[error(transparent)]
    Persistence(#[from] SnapshotError),

    /// Writing to the output streams failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl ConsoleError {
    /// Returns whether an interactive session can carry on after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}

/// Result type for console operations.
pub type ConsoleResult = Result<Outcome, ConsoleError>;

/// Text front end over a [`TaskStore`].
///
/// Confirmations and listings go to `out`; not-found and error messages go
/// to `err`. When a snapshot store is attached, the full store state is
/// saved after every successful mutation.
pub struct TaskConsole<'a, C, O, E>
where
    C: Clock,
    O: Write,
    E: Write,
{
    store: &'a mut TaskStore<C>,
    snapshots: Option<&'a dyn TaskSnapshotStore>,
    out: O,
    err: E,
}

impl<'a, C, O, E> TaskConsole<'a, C, O, E>
where
    C: Clock,
    O: Write,
    E: Write,
{
    /// Creates a console that keeps state in memory only.
    pub const fn new(store: &'a mut TaskStore<C>, out: O, err: E) -> Self {
        Self {
            store,
            snapshots: None,
            out,
            err,
        }
    }

    /// Attaches a snapshot store written after each successful mutation.
    #[must_use]
    pub fn with_snapshots(mut self, snapshots: &'a dyn TaskSnapshotStore) -> Self {
        self.snapshots = Some(snapshots);
        self
    }

    /// Writes a line to the output stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Writes a prompt without a trailing newline and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Writes `Error: {err}` to the error stream.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn report_error(&mut self, error: &ConsoleError) -> io::Result<()> {
        writeln!(self.err, "Error: {error}")
    }

    /// Adds a task.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] for invalid input and
    /// [`ConsoleError::Persistence`] when the snapshot cannot be saved.
    pub fn add(&mut self, title: &str, description: Option<&str>) -> ConsoleResult {
        let task = self.store.add(title, description)?;
        self.persist()?;
        writeln!(self.out, "Task {} added.", task.id())?;
        Ok(Outcome::Done)
    }

    /// Lists every task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Output`] when writing fails.
    pub fn list(&mut self) -> ConsoleResult {
        let tasks = self.store.list();
        if tasks.is_empty() {
            writeln!(self.out, "No tasks found.")?;
            return Ok(Outcome::Done);
        }
        for task in &tasks {
            write_task_line(&mut self.out, task)?;
        }
        Ok(Outcome::Done)
    }

    /// Shows the details of one task.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Output`] when writing fails.
    pub fn show(&mut self, id: TaskId) -> ConsoleResult {
        let Some(task) = self.store.get(id) else {
            return self.not_found(id);
        };
        writeln!(self.out, "Task {}", task.id())?;
        writeln!(self.out, "  Title: {}", task.title())?;
        writeln!(self.out, "  Status: {}", status_word(task.is_completed()))?;
        if let Some(description) = task.description() {
            writeln!(self.out, "  Description: {description}")?;
        }
        writeln!(self.out, "  Created: {}", task.created_at().to_rfc3339())?;
        Ok(Outcome::Done)
    }

    /// Marks a task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the snapshot cannot be
    /// saved.
    pub fn complete(&mut self, id: TaskId) -> ConsoleResult {
        if !self.store.mark_complete(id) {
            return self.not_found(id);
        }
        self.persist()?;
        writeln!(self.out, "Task {id} marked completed.")?;
        Ok(Outcome::Done)
    }

    /// Marks a task as not completed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the snapshot cannot be
    /// saved.
    pub fn incomplete(&mut self, id: TaskId) -> ConsoleResult {
        if !self.store.mark_incomplete(id) {
            return self.not_found(id);
        }
        self.persist()?;
        writeln!(self.out, "Task {id} marked incomplete.")?;
        Ok(Outcome::Done)
    }

    /// Flips a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the snapshot cannot be
    /// saved.
    pub fn toggle(&mut self, id: TaskId) -> ConsoleResult {
        if !self.store.toggle_completion(id) {
            return self.not_found(id);
        }
        self.persist()?;
        let completed = self
            .store
            .get(id)
            .is_some_and(|task| task.is_completed());
        writeln!(self.out, "Task {id} marked {}.", status_word(completed))?;
        Ok(Outcome::Done)
    }

    /// Updates a task's title and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] for invalid input and
    /// [`ConsoleError::Persistence`] when the snapshot cannot be saved.
    pub fn update(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> ConsoleResult {
        if !self.store.update(id, title, description)? {
            return self.not_found(id);
        }
        self.persist()?;
        writeln!(self.out, "Task {id} updated.")?;
        Ok(Outcome::Done)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Persistence`] when the snapshot cannot be
    /// saved.
    pub fn delete(&mut self, id: TaskId) -> ConsoleResult {
        if !self.store.delete(id) {
            return self.not_found(id);
        }
        self.persist()?;
        writeln!(self.out, "Task {id} removed.")?;
        Ok(Outcome::Done)
    }

    fn not_found(&mut self, id: TaskId) -> ConsoleResult {
        writeln!(self.err, "Error: Task with ID {id} not found.")?;
        Ok(Outcome::NotFound)
    }

    fn persist(&self) -> Result<(), SnapshotError> {
        let Some(snapshots) = self.snapshots else {
            return Ok(());
        };
        snapshots.save(&self.store.snapshot()).inspect_err(|err| {
            warn!(error = %err, "failed to save task state");
        })
    }
}

fn status_word(completed: bool) -> &'static str {
    if completed { "completed" } else { "incomplete" }
}

fn write_task_line(out: &mut impl Write, task: &Task) -> io::Result<()> {
    let mark = if task.is_completed() { 'X' } else { ' ' };
    writeln!(out, "{}. [{mark}] {}", task.id(), task.title())?;
    if let Some(description) = task.description() {
        writeln!(out, "   Description: {description}")?;
    }
    Ok(())
}
