//! Application services for task lifecycle orchestration.

mod config;
mod lifecycle;
mod requests;
mod runtime;

pub use config::{TaskRuntimeConfig, TaskRuntimeConfigError};
pub use lifecycle::{TaskErrorKind, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use requests::{AssignTaskRequest, CreateTaskRequest, DeleteTaskRequest, UpdateTaskRequest};
pub use runtime::{TaskAdminRuntime, TaskRuntime};
