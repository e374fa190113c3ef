//! Shared world state for task runtime BDD scenarios.

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
    domain::{Page, Task},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task runtime behaviour tests.
pub struct TaskRuntimeWorld {
    pub service: TestTaskService,
    pub directory: InMemoryUserDirectory,
    pub current_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
    pub last_listing: Option<Page<Task>>,
}

impl TaskRuntimeWorld {
    /// Creates a world with an empty store and directory.
    #[must_use]
    pub fn new() -> Self {
        let service =
            TaskLifecycleService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock));

        Self {
            service,
            directory: InMemoryUserDirectory::new(),
            current_task: None,
            last_result: None,
            last_listing: None,
        }
    }

    /// Resolves a scenario user through the directory.
    pub fn principal(&self, user: &str) -> Result<Principal, eyre::Report> {
        let id = UserId::new(user)?;
        Ok(run_async(self.directory.principal(&id))?)
    }

    /// Returns the task the scenario is working on.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Records an operation result, tracking the task on success.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref updated) = result {
            self.current_task = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for TaskRuntimeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskRuntimeWorld {
    TaskRuntimeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
