//! Request payloads accepted by the task runtime.

use crate::task::domain::{DEFAULT_PRIORITY, TaskId};
use chrono::{DateTime, Utc};

/// Request payload for creating a standalone task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) priority: u32,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) assignee: Option<String>,
    pub(super) candidate_groups: Vec<String>,
    pub(super) candidate_users: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            priority: DEFAULT_PRIORITY,
            due_date: None,
            assignee: None,
            candidate_groups: Vec::new(),
            candidate_users: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task directly; the task starts `ASSIGNED`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Adds a candidate group.
    #[must_use]
    pub fn with_candidate_group(mut self, group: impl Into<String>) -> Self {
        self.candidate_groups.push(group.into());
        self
    }

    /// Sets the candidate groups.
    #[must_use]
    pub fn with_candidate_groups(mut self, groups: impl IntoIterator<Item = String>) -> Self {
        self.candidate_groups = groups.into_iter().collect();
        self
    }

    /// Adds a candidate user.
    #[must_use]
    pub fn with_candidate_user(mut self, user: impl Into<String>) -> Self {
        self.candidate_users.push(user.into());
        self
    }
}

/// Request payload for handing a task to a named user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) assignee: String,
}

impl AssignTaskRequest {
    /// Creates an assignment request.
    #[must_use]
    pub fn new(task_id: TaskId, assignee: impl Into<String>) -> Self {
        Self {
            task_id,
            assignee: assignee.into(),
        }
    }
}

/// Request payload for changing descriptive task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) name: Option<String>,
    pub(super) description: Option<String>,
    pub(super) priority: Option<u32>,
    pub(super) due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update for `task_id`.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            name: None,
            description: None,
            priority: None,
            due_date: None,
        }
    }

    /// Renames the task.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Changes the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Changes the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for soft-deleting a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTaskRequest {
    pub(super) task_id: TaskId,
    pub(super) reason: Option<String>,
}

impl DeleteTaskRequest {
    /// Creates a delete request without a reason.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            reason: None,
        }
    }

    /// Records why the task is deleted.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
