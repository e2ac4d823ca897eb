//! Handling of missing and corrupt task files.

use super::helpers::{TaskFile, task_file};
use mockable::DefaultClock;
use rstest::rstest;
use std::fs;
use tasklist::task::{
    adapters::file::JsonFileSnapshotStore,
    domain::{TaskId, TaskPolicy},
    ports::{SnapshotError, TaskSnapshotStore},
    services::{CorruptStatePolicy, TaskStore},
};

#[rstest]
fn missing_file_opens_empty_store(task_file: TaskFile) {
    let snapshots = JsonFileSnapshotStore::new(task_file.path.clone());

    let store = TaskStore::open(
        &snapshots,
        TaskPolicy::strict(),
        CorruptStatePolicy::Fail,
        DefaultClock,
    )
    .expect("missing file is not an error");

    assert_eq!(store.count(), 0);
    assert_eq!(store.next_id(), TaskId::FIRST);
    assert!(!task_file.path.exists());
}

#[rstest]
#[case::garbage("{{{ definitely not json")]
#[case::wrong_shape(r#"[1, 2, 3]"#)]
#[case::stale_counter(r#"{"tasks": [{"id": 4, "title": "late"}], "next_id": 2}"#)]
fn corrupt_file_starts_fresh_by_default(task_file: TaskFile, #[case] contents: &str) {
    fs::write(&task_file.path, contents).expect("write fixture");
    let snapshots = JsonFileSnapshotStore::new(task_file.path.clone());

    let store = TaskStore::open(
        &snapshots,
        TaskPolicy::strict(),
        CorruptStatePolicy::StartFresh,
        DefaultClock,
    )
    .expect("corrupt state is discarded");

    assert_eq!(store.count(), 0);
    assert_eq!(store.next_id(), TaskId::FIRST);
}

#[rstest]
fn corrupt_file_is_surfaced_when_failing(task_file: TaskFile) {
    fs::write(&task_file.path, "not json").expect("write fixture");
    let snapshots = JsonFileSnapshotStore::new(task_file.path.clone());

    let result = TaskStore::open(
        &snapshots,
        TaskPolicy::strict(),
        CorruptStatePolicy::Fail,
        DefaultClock,
    );

    assert!(matches!(result, Err(SnapshotError::Corrupt(_))));
}

#[rstest]
fn first_save_after_recovery_replaces_corrupt_file(task_file: TaskFile) {
    fs::write(&task_file.path, "not json").expect("write fixture");
    let snapshots = JsonFileSnapshotStore::new(task_file.path.clone());
    let mut store = TaskStore::open(
        &snapshots,
        TaskPolicy::strict(),
        CorruptStatePolicy::StartFresh,
        DefaultClock,
    )
    .expect("corrupt state is discarded");

    store.add("fresh start", None).expect("valid title");
    snapshots.save(&store.snapshot()).expect("save snapshot");

    let loaded = snapshots
        .load()
        .expect("file is valid again")
        .expect("snapshot present");
    assert_eq!(loaded.tasks.len(), 1);
    assert_eq!(loaded.next_id.value(), 2);
}
