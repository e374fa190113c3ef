//! Domain model for the task lifecycle.
//!
//! The task domain models creation, claiming, assignment, completion,
//! update, and soft deletion of tasks. Every status change is validated by
//! the single transition table in [`TaskStatus::next`]; authorization lives
//! outside the domain in [`crate::task::policy`].

mod draft;
mod error;
mod ids;
mod page;
mod status;
mod task;

pub use draft::{TaskAssignment, TaskChanges, TaskDraft};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use page::{Page, Pageable};
pub use status::{TaskAction, TaskStatus};
pub use task::{DEFAULT_PRIORITY, Task, TaskPrecondition};
