//! Create, update, toggle and delete flows against the in-memory store.

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasklist::task::{
    domain::{Task, TaskPolicy},
    services::TaskStore,
};

#[fixture]
fn store() -> TaskStore<DefaultClock> {
    TaskStore::new(TaskPolicy::default(), DefaultClock)
}

fn only_task(tasks: &[Task]) -> Result<&Task, eyre::Report> {
    eyre::ensure!(
        tasks.len() == 1,
        "expected exactly one task, found {}",
        tasks.len()
    );
    tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))
}

#[rstest]
fn buy_milk_walkthrough(mut store: TaskStore<DefaultClock>) -> Result<(), eyre::Report> {
    let created = store.add("Buy milk", None)?;

    let listed = store.list();
    let task = only_task(&listed)?;
    eyre::ensure!(task.title() == "Buy milk", "unexpected title");
    eyre::ensure!(!task.is_completed(), "new task should be incomplete");

    eyre::ensure!(store.toggle_completion(created.id()), "toggle should find task");
    let listed = store.list();
    eyre::ensure!(only_task(&listed)?.is_completed(), "task should be completed");

    eyre::ensure!(
        store.update(created.id(), Some("Buy milk and eggs"), None)?,
        "update should find task"
    );
    let listed = store.list();
    eyre::ensure!(
        only_task(&listed)?.title() == "Buy milk and eggs",
        "title should reflect update"
    );

    eyre::ensure!(store.delete(created.id()), "delete should find task");
    eyre::ensure!(store.list().is_empty(), "store should be empty");
    Ok(())
}

#[rstest]
fn listing_keeps_insertion_order_after_updates(mut store: TaskStore<DefaultClock>) {
    let first = store.add("alpha", None).expect("valid title");
    store.add("beta", None).expect("valid title");
    store.add("gamma", None).expect("valid title");

    store
        .update(first.id(), Some("alpha prime"), None)
        .expect("valid update");
    store.toggle_completion(first.id());

    let titles: Vec<String> = store
        .list()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(titles, vec!["alpha prime", "beta", "gamma"]);
}

#[rstest]
fn partial_updates_touch_only_supplied_fields(mut store: TaskStore<DefaultClock>) {
    let task = store.add("Title", Some("Description")).expect("valid task");
    let created_at = task.created_at();

    store
        .update(task.id(), Some("T"), None)
        .expect("valid title update");
    store
        .update(task.id(), None, Some("D"))
        .expect("valid description update");

    let updated = store.get(task.id()).expect("task exists");
    assert_eq!(updated.title(), "T");
    assert_eq!(updated.description(), Some("D"));
    assert_eq!(updated.created_at(), created_at);
    assert!(!updated.is_completed());
}
