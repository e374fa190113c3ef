//! Given steps for task runtime BDD scenarios.

use super::world::{TaskRuntimeWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskward::security::domain::Principal;
use taskward::task::services::{CreateTaskRequest, DeleteTaskRequest};

#[given("a task runtime with the standard users")]
fn standard_users(world: &mut TaskRuntimeWorld) -> Result<(), eyre::Report> {
    world.directory.insert(Principal::parse("garth", ["doctor"])?)?;
    world
        .directory
        .insert(Principal::parse("salaboy", ["activitiTeam"])?)?;
    world.directory.insert(Principal::parse("other", ["otherTeam"])?)?;
    world
        .directory
        .insert(Principal::parse("admin", Vec::<String>::new())?.as_admin())?;
    Ok(())
}

#[given(r#""{user}" has created a task "{name}" for candidate group "{group}""#)]
fn created_group_task(
    world: &mut TaskRuntimeWorld,
    user: String,
    name: String,
    group: String,
) -> Result<(), eyre::Report> {
    let principal = world.principal(&user)?;
    let request = CreateTaskRequest::new(name).with_candidate_group(group);
    let created = run_async(world.service.runtime().create(&principal, request))
        .wrap_err("create group task in scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#""{user}" has created a task "{name}" assigned to "{assignee}""#)]
fn created_assigned_task(
    world: &mut TaskRuntimeWorld,
    user: String,
    name: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let principal = world.principal(&user)?;
    let request = CreateTaskRequest::new(name).with_assignee(assignee);
    let created = run_async(world.service.runtime().create(&principal, request))
        .wrap_err("create assigned task in scenario setup")?;
    world.current_task = Some(created);
    Ok(())
}

#[given(r#""{user}" has deleted the task"#)]
fn deleted_task(world: &mut TaskRuntimeWorld, user: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&user)?;
    let id = world.task()?.id();
    let deleted = run_async(
        world
            .service
            .runtime()
            .delete(&principal, DeleteTaskRequest::new(id)),
    )
    .wrap_err("delete task in scenario setup")?;
    world.current_task = Some(deleted);
    Ok(())
}
