//! Command dispatch for the `tasklist` binary.

use super::{
    args::{Cli, Command, join_words},
    console::{ConsoleError, ConsoleResult, Outcome, TaskConsole},
    interactive::run_menu,
};
use crate::config::{Persistence, StoreConfig};
use crate::task::{
    adapters::file::JsonFileSnapshotStore,
    ports::{SnapshotError, TaskSnapshotStore},
    services::TaskStore,
};
use mockable::{Clock, DefaultClock};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors that end a command-line invocation with a failure exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// The saved task state could not be opened.
    #[error(transparent)]
    Open(#[from] SnapshotError),

    /// A command failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// Opens the store described by `config` and returns it together with the
/// snapshot store to save into, if any.
///
/// # Errors
///
/// Returns [`SnapshotError`] when the saved state cannot be read, or is
/// corrupt and the configuration asks to fail on corruption.
pub fn open_store<C>(
    config: &StoreConfig,
    clock: C,
) -> Result<(TaskStore<C>, Option<Box<dyn TaskSnapshotStore>>), SnapshotError>
where
    C: Clock,
{
    match &config.persistence {
        Persistence::InMemory => Ok((TaskStore::new(config.policy, clock), None)),
        Persistence::File(path) => {
            let snapshots = JsonFileSnapshotStore::new(path.clone());
            let store = TaskStore::open(&snapshots, config.policy, config.on_corrupt, clock)?;
            debug!(path = %path, tasks = store.count(), "task store opened");
            Ok((store, Some(Box::new(snapshots))))
        }
    }
}

/// Runs the parsed command line against the configured store.
///
/// Without a subcommand an interactive menu reads from `input`. Not-found
/// results are reported but are not failures.
///
/// # Errors
///
/// Returns [`CliError`] when the store cannot be opened or the command
/// fails validation, persistence or output.
pub fn run<R, O, E>(cli: &Cli, input: R, out: O, err: E) -> Result<(), CliError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let (mut store, snapshots) = open_store(&cli.store_config(), DefaultClock)?;
    let mut console = TaskConsole::new(&mut store, out, err);
    if let Some(snapshots) = snapshots.as_deref() {
        console = console.with_snapshots(snapshots);
    }

    match &cli.command {
        None => run_menu(&mut console, input)?,
        Some(command) => {
            dispatch(&mut console, command)?;
        }
    }
    Ok(())
}

/// Executes a single subcommand.
///
/// # Errors
///
/// Returns [`ConsoleError`] when the command fails.
pub fn dispatch<C, O, E>(console: &mut TaskConsole<'_, C, O, E>, command: &Command) -> ConsoleResult
where
    C: Clock,
    O: Write,
    E: Write,
{
    let result = match command {
        Command::Add { title, description } => {
            let joined = join_words(title).unwrap_or_default();
            console.add(&joined, description.as_deref())
        }
        Command::List => console.list(),
        Command::Show { id } => console.show(*id),
        Command::Complete { id } => console.complete(*id),
        Command::Incomplete { id } => console.incomplete(*id),
        Command::Toggle { id } => console.toggle(*id),
        Command::Update {
            id,
            title,
            description,
        } => {
            let joined = join_words(title);
            console.update(*id, joined.as_deref(), description.as_deref())
        }
        Command::Delete { id } => console.delete(*id),
    };
    if matches!(result, Ok(Outcome::NotFound)) {
        debug!(?command, "no task matched");
    }
    result
}
