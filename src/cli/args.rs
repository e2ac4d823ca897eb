//! Command-line arguments.

use crate::config::{Persistence, StoreConfig};
use crate::task::{
    adapters::file::DEFAULT_DATA_FILE,
    domain::{TaskId, TaskPolicy},
    services::CorruptStatePolicy,
};
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Manage your tasks from the command line.
///
/// Runs an interactive menu when no subcommand is given.
#[derive(Debug, Parser)]
#[command(name = "tasklist", version)]
pub struct Cli {
    /// JSON file holding the task list
    #[arg(long, env = "TASKLIST_DATA_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: Utf8PathBuf,

    /// Keep tasks in memory only; nothing is read or written
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Validation policy for titles and descriptions
    #[arg(long, value_enum, default_value_t = PolicyArg::Strict, global = true)]
    pub policy: PolicyArg,

    /// Fail instead of starting empty when the task file is corrupt
    #[arg(long, global = true)]
    pub strict_load: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Validation policy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Titles up to 100 characters, descriptions up to 500
    Strict,
    /// No length caps; only blank titles are rejected
    Lenient,
}

impl From<PolicyArg> for TaskPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Strict => Self::strict(),
            PolicyArg::Lenient => Self::lenient(),
        }
    }
}

/// Task subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all tasks, oldest first
    List,

    /// Show one task in detail
    Show {
        /// Task ID
        id: TaskId,
    },

    /// Mark a task as complete
    Complete {
        /// Task ID
        id: TaskId,
    },

    /// Mark a task as not complete
    Incomplete {
        /// Task ID
        id: TaskId,
    },

    /// Toggle a task's completion status
    Toggle {
        /// Task ID
        id: TaskId,
    },

    /// Update a task's title and/or description
    Update {
        /// Task ID
        id: TaskId,
        /// New title; multiple words are joined with spaces
        #[arg(required_unless_present = "description")]
        title: Vec<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
}

impl Cli {
    /// Builds the store configuration selected by the arguments.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        let persistence = if self.in_memory {
            Persistence::InMemory
        } else {
            Persistence::File(self.data_file.clone())
        };
        let on_corrupt = if self.strict_load {
            CorruptStatePolicy::Fail
        } else {
            CorruptStatePolicy::StartFresh
        };
        StoreConfig {
            persistence,
            policy: self.policy.into(),
            on_corrupt,
        }
    }
}

/// Joins positional words into a single title, or `None` when there are
/// none.
#[must_use]
pub fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
