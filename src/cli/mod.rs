//! Command-line front end.
//!
//! [`args`] defines the clap interface, [`console`] formats store results
//! for the user, [`interactive`] runs the numbered menu and [`run`]
//! dispatches a parsed command line.

pub mod args;
pub mod console;
pub mod interactive;
pub mod logging;
pub mod run;

pub use args::{Cli, Command};
pub use console::{ConsoleError, ConsoleResult, Outcome, TaskConsole};
pub use run::{CliError, dispatch, open_store, run};
