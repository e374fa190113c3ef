//! Concurrent claims on a single task.

use super::helpers::{TestRuntime, TestService, service};
use eyre::ensure;
use rstest::rstest;
use taskward::security::domain::Principal;
use taskward::task::{
    domain::{Task, TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskErrorKind, TaskLifecycleResult},
};
use tokio::task::JoinHandle;

fn spawn_claim(
    runtime: &TestRuntime,
    principal: Principal,
    id: TaskId,
) -> JoinHandle<TaskLifecycleResult<Task>> {
    let runtime = runtime.clone();
    tokio::spawn(async move { runtime.claim(&principal, id).await })
}

#[rstest]
#[case(2)]
#[case(16)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn exactly_one_concurrent_claim_succeeds(
    service: TestService,
    #[case] contenders: usize,
) -> eyre::Result<()> {
    let runtime = service.runtime();
    let creator = Principal::parse("garth", ["doctor"])?;
    let task = runtime
        .create(
            &creator,
            CreateTaskRequest::new("contested task").with_candidate_group("activitiTeam"),
        )
        .await?;

    let handles = (0..contenders)
        .map(|index| {
            let claimant = Principal::parse(format!("member-{index}"), ["activitiTeam"])?;
            Ok(spawn_claim(&runtime, claimant, task.id()))
        })
        .collect::<Result<Vec<_>, eyre::Report>>()?;
    let mut winners = Vec::new();
    let mut losers = Vec::new();
    for handle in handles {
        match handle.await? {
            Ok(claimed) => winners.push(claimed),
            Err(err) => losers.push(err.kind()),
        }
    }

    ensure!(winners.len() == 1, "expected one winner, got {}", winners.len());
    ensure!(losers.iter().all(|kind| *kind == TaskErrorKind::InvalidState));
    let winner = winners
        .first()
        .ok_or_else(|| eyre::eyre!("missing winning claim"))?;
    let stored = runtime.task(&creator, task.id()).await?;
    ensure!(stored.status() == TaskStatus::Assigned);
    ensure!(stored.assignee() == winner.assignee());
    ensure!(stored.revision() == 1);
    Ok(())
}
