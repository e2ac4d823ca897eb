//! Command dispatch against a task file.

use super::helpers::{TaskFile, task_file};
use clap::Parser;
use rstest::rstest;
use std::fs;
use tasklist::cli::{Cli, CliError, ConsoleError, run};
use tasklist::task::{domain::TaskValidationError, ports::SnapshotError};

struct Invocation {
    result: Result<(), CliError>,
    out: String,
    err: String,
}

fn invoke(task_file: &TaskFile, args: &[&str], input: &str) -> Invocation {
    let mut argv = vec!["tasklist", "--data-file", task_file.path.as_str()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("valid arguments");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&cli, input.as_bytes(), &mut out, &mut err);
    Invocation {
        result,
        out: String::from_utf8_lossy(&out).into_owned(),
        err: String::from_utf8_lossy(&err).into_owned(),
    }
}

#[rstest]
fn commands_share_state_through_the_file(task_file: TaskFile) {
    let added = invoke(&task_file, &["add", "Buy", "milk"], "");
    assert!(added.result.is_ok());
    assert_eq!(added.out, "Task 1 added.\n");

    let completed = invoke(&task_file, &["complete", "1"], "");
    assert!(completed.result.is_ok());
    assert_eq!(completed.out, "Task 1 marked completed.\n");

    let updated = invoke(&task_file, &["update", "1", "Buy", "milk", "and", "eggs"], "");
    assert!(updated.result.is_ok());

    let listed = invoke(&task_file, &["list"], "");
    assert_eq!(listed.out, "1. [X] Buy milk and eggs\n");

    let deleted = invoke(&task_file, &["delete", "1"], "");
    assert_eq!(deleted.out, "Task 1 removed.\n");

    let empty = invoke(&task_file, &["list"], "");
    assert_eq!(empty.out, "No tasks found.\n");

    let next = invoke(&task_file, &["add", "Next"], "");
    assert_eq!(next.out, "Task 2 added.\n");
}

#[rstest]
fn validation_failure_is_an_error(task_file: TaskFile) {
    let long_title = "x".repeat(101);
    let invocation = invoke(&task_file, &["add", &long_title], "");

    assert!(matches!(
        invocation.result,
        Err(CliError::Console(ConsoleError::Validation(
            TaskValidationError::TitleTooLong { .. }
        )))
    ));
    assert!(!task_file.path.exists());
}

#[rstest]
fn lenient_policy_accepts_long_titles(task_file: TaskFile) {
    let long_title = "x".repeat(101);
    let invocation = invoke(&task_file, &["--policy", "lenient", "add", &long_title], "");

    assert!(invocation.result.is_ok());
    assert_eq!(invocation.out, "Task 1 added.\n");
}

#[rstest]
fn not_found_is_reported_but_not_an_error(task_file: TaskFile) {
    let invocation = invoke(&task_file, &["delete", "7"], "");

    assert!(invocation.result.is_ok());
    assert_eq!(invocation.err, "Error: Task with ID 7 not found.\n");
    assert!(!task_file.path.exists());
}

#[rstest]
fn strict_load_fails_on_corrupt_file(task_file: TaskFile) {
    fs::write(&task_file.path, "not json").expect("write fixture");

    let invocation = invoke(&task_file, &["--strict-load", "list"], "");

    assert!(matches!(
        invocation.result,
        Err(CliError::Open(SnapshotError::Corrupt(_)))
    ));
}

#[rstest]
fn corrupt_file_is_silently_replaced_by_default(task_file: TaskFile) {
    fs::write(&task_file.path, "not json").expect("write fixture");

    let listed = invoke(&task_file, &["list"], "");
    assert!(listed.result.is_ok());
    assert_eq!(listed.out, "No tasks found.\n");
    assert!(listed.err.is_empty());

    let added = invoke(&task_file, &["add", "Recovered"], "");
    assert_eq!(added.out, "Task 1 added.\n");
}

#[rstest]
fn interactive_session_persists_changes(task_file: TaskFile) {
    let session = invoke(&task_file, &[], "1\nWater plants\n6\n");
    assert!(session.result.is_ok());
    assert!(session.out.contains("Task 1 added."));

    let listed = invoke(&task_file, &["list"], "");
    assert_eq!(listed.out, "1. [ ] Water plants\n");
}

#[rstest]
fn in_memory_posture_never_touches_the_file(task_file: TaskFile) {
    let invocation = invoke(&task_file, &["--in-memory", "add", "Ephemeral"], "");

    assert!(invocation.result.is_ok());
    assert!(!task_file.path.exists());
}
