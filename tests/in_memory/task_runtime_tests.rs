//! End-to-end behaviour of the user and admin facades.

use super::helpers::{TestService, resolve, seeded_directory, service};
use eyre::ensure;
use rstest::rstest;
use taskward::task::{
    domain::{Pageable, TaskStatus},
    services::{CreateTaskRequest, DeleteTaskRequest, TaskErrorKind},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directly_assigned_task_lifecycle(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let garth = resolve(&directory, "garth").await?;
    let runtime = service.runtime();

    let created = runtime
        .create(&garth, CreateTaskRequest::new("simple task").with_assignee("garth"))
        .await?;
    let listed = runtime.tasks(&garth, Pageable::of(0, 50)?).await?;

    ensure!(listed.total_items() == 1);
    let task = listed
        .content()
        .first()
        .ok_or_else(|| eyre::eyre!("expected one listed task"))?;
    ensure!(task.status() == TaskStatus::Assigned);
    ensure!(task.assignee() == Some(garth.id()));

    let deleted = runtime
        .delete(&garth, DeleteTaskRequest::new(created.id()))
        .await?;
    ensure!(deleted.status() == TaskStatus::Deleted);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn group_task_is_claimed_by_member(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let garth = resolve(&directory, "garth").await?;
    let salaboy = resolve(&directory, "salaboy").await?;
    let runtime = service.runtime();

    let created = runtime
        .create(
            &garth,
            CreateTaskRequest::new("simple task").with_candidate_group("activitiTeam"),
        )
        .await?;
    let listed = runtime.tasks(&garth, Pageable::of(0, 50)?).await?;
    let first = listed
        .content()
        .first()
        .ok_or_else(|| eyre::eyre!("expected one listed task"))?;
    ensure!(first.status() == TaskStatus::Created);
    ensure!(first.assignee().is_none());

    let claimed = runtime.claim(&salaboy, created.id()).await?;
    ensure!(claimed.status() == TaskStatus::Assigned);
    ensure!(claimed.assignee() == Some(salaboy.id()));

    let late_claim = runtime.claim(&garth, created.id()).await;
    ensure!(late_claim.err().map(|err| err.kind()) == Some(TaskErrorKind::InvalidState));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_sees_and_deletes_tasks_hidden_from_users(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let salaboy = resolve(&directory, "salaboy").await?;
    let other = resolve(&directory, "other").await?;
    let admin = resolve(&directory, "admin").await?;
    let runtime = service.runtime();
    let admin_runtime = service.admin_runtime();

    let created = runtime
        .create(&salaboy, CreateTaskRequest::new("private task").with_assignee("salaboy"))
        .await?;
    let for_other = runtime.tasks(&other, Pageable::of(0, 50)?).await?;
    let for_admin = admin_runtime.tasks(&admin, Pageable::of(0, 50)?).await?;

    ensure!(for_other.is_empty());
    ensure!(for_admin.content().iter().any(|task| task.id() == created.id()));

    let deleted = admin_runtime
        .delete(&admin, DeleteTaskRequest::new(created.id()))
        .await?;
    ensure!(deleted.status() == TaskStatus::Deleted);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_round_trip(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let garth = resolve(&directory, "garth").await?;
    let admin = resolve(&directory, "admin").await?;
    let runtime = service.runtime();
    let admin_runtime = service.admin_runtime();
    let created = runtime
        .create(&garth, CreateTaskRequest::new("simple task").with_assignee("garth"))
        .await?;

    runtime
        .delete(&garth, DeleteTaskRequest::new(created.id()).with_reason("done elsewhere"))
        .await?;

    let via_user = runtime.task(&garth, created.id()).await;
    ensure!(via_user.err().map(|err| err.kind()) == Some(TaskErrorKind::NotFound));
    let via_admin = admin_runtime.task(&admin, created.id()).await?;
    ensure!(via_admin.status() == TaskStatus::Deleted);
    ensure!(via_admin.reason() == Some("done elsewhere"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_admin_cannot_use_admin_facade(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let salaboy = resolve(&directory, "salaboy").await?;

    let result = service
        .admin_runtime()
        .tasks(&salaboy, Pageable::of(0, 50)?)
        .await;

    ensure!(result.err().map(|err| err.kind()) == Some(TaskErrorKind::NotAuthorized));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_stays_visible_to_assignee(service: TestService) -> eyre::Result<()> {
    let directory = seeded_directory()?;
    let garth = resolve(&directory, "garth").await?;
    let salaboy = resolve(&directory, "salaboy").await?;
    let runtime = service.runtime();
    let created = runtime
        .create(
            &garth,
            CreateTaskRequest::new("simple task").with_candidate_group("activitiTeam"),
        )
        .await?;
    runtime.claim(&salaboy, created.id()).await?;

    runtime.complete(&salaboy, created.id()).await?;

    let fetched = runtime.task(&salaboy, created.id()).await?;
    ensure!(fetched.status() == TaskStatus::Completed);
    let delete = runtime
        .delete(&salaboy, DeleteTaskRequest::new(created.id()))
        .await;
    ensure!(delete.err().map(|err| err.kind()) == Some(TaskErrorKind::InvalidState));
    Ok(())
}
