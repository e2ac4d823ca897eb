//! Given steps for task workflow BDD scenarios.

use super::world::TaskWorkflowWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    if world.store.count() != 0 {
        return Err(eyre::eyre!(
            "expected an empty store, found {} tasks",
            world.store.count()
        ));
    }
    Ok(())
}

#[given(r#"a task titled "{title}" has been added"#)]
fn task_has_been_added(world: &mut TaskWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .store
        .add(&title, None)
        .wrap_err("add task in scenario setup")?;
    world.last_added = Some(task);
    Ok(())
}
