//! Error types for task domain validation and parsing.

use super::{TaskAction, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or transitioning domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the storage limit.
    #[error("task name exceeds {max} character limit (got {actual})")]
    TaskNameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// A direct assignee was combined with candidate groups or users.
    #[error("a task created with an assignee must not have candidates")]
    AssigneeWithCandidates,

    /// An update request carried no changes.
    #[error("task update must change at least one field")]
    EmptyUpdate,

    /// A page request asked for zero items.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// The requested action is not permitted from the task's current status.
    #[error("cannot {action} task {task_id} in status {status}")]
    InvalidStateTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Status at the time of the request.
        status: TaskStatus,
        /// Rejected action.
        action: TaskAction,
    },
}

impl TaskDomainError {
    /// Returns whether the error reports an invalid status transition rather
    /// than malformed input.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidStateTransition { .. })
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
