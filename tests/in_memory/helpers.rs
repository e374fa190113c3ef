//! Shared test helpers for in-memory task runtime integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskward::security::{
    adapters::memory::InMemoryUserDirectory,
    domain::{Principal, UserId},
    ports::PrincipalProvider,
};
use taskward::task::{
    adapters::memory::InMemoryTaskStore,
    services::{TaskLifecycleService, TaskRuntime},
};

/// Lifecycle service over the in-memory store.
pub type TestService = TaskLifecycleService<InMemoryTaskStore, DefaultClock>;

/// User-scoped facade over the in-memory store.
pub type TestRuntime = TaskRuntime<InMemoryTaskStore, DefaultClock>;

/// Provides a fresh lifecycle service for each test.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock))
}

/// Provides a directory with the users exercised by the scenarios.
///
/// `garth` belongs to `doctor` only, `salaboy` to `activitiTeam`, `other` to
/// `otherTeam`, and `admin` holds the administrator role.
///
/// # Errors
///
/// Returns an error if any identifier is malformed or the directory lock is
/// poisoned.
pub fn seeded_directory() -> Result<InMemoryUserDirectory, eyre::Report> {
    let directory = InMemoryUserDirectory::new();
    directory.insert(Principal::parse("garth", ["doctor"])?)?;
    directory.insert(Principal::parse("salaboy", ["activitiTeam"])?)?;
    directory.insert(Principal::parse("other", ["otherTeam"])?)?;
    directory.insert(Principal::parse("admin", Vec::<String>::new())?.as_admin())?;
    Ok(directory)
}

/// Resolves a principal from the directory.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or the user is unknown.
pub async fn resolve(
    directory: &InMemoryUserDirectory,
    user: &str,
) -> Result<Principal, eyre::Report> {
    Ok(directory.principal(&UserId::new(user)?).await?)
}
