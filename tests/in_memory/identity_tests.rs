//! Identifier assignment tests for the in-memory store.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklist::task::{
    domain::{TaskId, TaskPolicy},
    services::TaskStore,
};

#[fixture]
fn store() -> TaskStore<DefaultClock> {
    TaskStore::new(TaskPolicy::default(), DefaultClock)
}

#[rstest]
fn ids_stay_strictly_increasing_across_deletes(mut store: TaskStore<DefaultClock>) {
    let mut assigned = Vec::new();
    for round in 0..5 {
        let task = store
            .add(&format!("task {round}"), None)
            .expect("valid title");
        assigned.push(task.id().value());
        if round % 2 == 0 {
            assert!(store.delete(task.id()));
        }
    }

    assert_eq!(assigned, vec![1, 2, 3, 4, 5]);
    assert_eq!(store.next_id().value(), 6);
    assert_eq!(store.count(), 2);
}

#[rstest]
fn failed_adds_do_not_consume_ids(mut store: TaskStore<DefaultClock>) {
    assert!(store.add("", None).is_err());
    assert!(store.add(&"x".repeat(101), None).is_err());
    assert!(store.add("ok", Some(&"d".repeat(501))).is_err());

    let task = store.add("first real task", None).expect("valid title");

    assert_eq!(task.id(), TaskId::FIRST);
}

#[rstest]
fn deleted_id_stays_invalid(mut store: TaskStore<DefaultClock>) {
    let task = store.add("gone", None).expect("valid title");
    assert!(store.delete(task.id()));
    store.add("replacement", None).expect("valid title");

    assert_eq!(store.get(task.id()), None);
    assert!(!store.toggle_completion(task.id()));
}
