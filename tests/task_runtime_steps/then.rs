//! Then steps for task runtime BDD scenarios.

use super::world::TaskRuntimeWorld;
use rstest_bdd_macros::then;
use taskward::task::{domain::TaskStatus, services::TaskErrorKind};

fn parse_kind(kind: &str) -> Result<TaskErrorKind, eyre::Report> {
    match kind {
        "NotFound" => Ok(TaskErrorKind::NotFound),
        "InvalidState" => Ok(TaskErrorKind::InvalidState),
        "NotAuthorized" => Ok(TaskErrorKind::NotAuthorized),
        "Validation" => Ok(TaskErrorKind::Validation),
        other => Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    }
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskRuntimeWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;

    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then(r#"the task assignee is "{user}""#)]
fn task_assignee_is(world: &TaskRuntimeWorld, user: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let assignee = task.assignee().map(|id| id.as_str());

    eyre::ensure!(
        assignee == Some(user.as_str()),
        "expected assignee {user}, found {assignee:?}"
    );
    Ok(())
}

#[then("the task has no assignee")]
fn task_has_no_assignee(world: &TaskRuntimeWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;

    eyre::ensure!(
        task.assignee().is_none(),
        "expected no assignee, found {:?}",
        task.assignee()
    );
    Ok(())
}

#[then(r#"the operation fails with "{kind}""#)]
fn operation_fails_with(world: &TaskRuntimeWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = parse_kind(&kind)?;
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    match result {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {kind} error, got {other:?}")),
    }
}

#[then("the listing size is {count:usize}")]
fn listing_size_is(world: &TaskRuntimeWorld, count: usize) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task listing"))?;

    eyre::ensure!(
        listing.total_items() == count,
        "expected {count} listed tasks, found {}",
        listing.total_items()
    );
    Ok(())
}

#[then("the listing includes the task")]
fn listing_includes_task(world: &TaskRuntimeWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task listing"))?;

    eyre::ensure!(
        listing.content().iter().any(|task| task.id() == id),
        "task {id} missing from listing"
    );
    Ok(())
}
