//! Store port for task persistence, guarded updates, and visibility queries.

use crate::task::{
    domain::{Page, Pageable, Task, TaskId, TaskPrecondition},
    policy::TaskVisibility,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Records are never removed; deletion is a status written through
/// [`TaskStore::compare_and_update`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Replaces a stored task if it still matches `expected`.
    ///
    /// The comparison and the write are atomic with respect to other calls
    /// for the same task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist, or
    /// [`TaskStoreError::Conflict`] when the stored status or revision
    /// differs from `expected`.
    async fn compare_and_update(
        &self,
        expected: TaskPrecondition,
        task: &Task,
    ) -> TaskStoreResult<()>;

    /// Returns one page of tasks matching `visibility`, in insertion order.
    async fn query(
        &self,
        visibility: &TaskVisibility,
        pageable: Pageable,
    ) -> TaskStoreResult<Page<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored task no longer matches the expected precondition.
    #[error("concurrent modification of task {0}")]
    Conflict(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
