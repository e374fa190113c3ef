//! Validated inputs for creating and updating tasks.

use super::{TaskDomainError, TaskName};
use crate::security::domain::{GroupId, UserId};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Initial ownership of a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAssignment {
    /// The task is owned by the given user from the start.
    Direct(UserId),
    /// The task is offered to candidates until someone claims it.
    Candidates {
        /// Groups whose members may claim the task.
        groups: BTreeSet<GroupId>,
        /// Individual users who may claim the task.
        users: BTreeSet<UserId>,
    },
}

impl TaskAssignment {
    /// Builds an assignment from optional assignee and candidate sets.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AssigneeWithCandidates`] when an assignee
    /// is combined with any candidate.
    pub fn resolve(
        assignee: Option<UserId>,
        groups: BTreeSet<GroupId>,
        users: BTreeSet<UserId>,
    ) -> Result<Self, TaskDomainError> {
        match assignee {
            Some(_) if !groups.is_empty() || !users.is_empty() => {
                Err(TaskDomainError::AssigneeWithCandidates)
            }
            Some(user) => Ok(Self::Direct(user)),
            None => Ok(Self::Candidates { groups, users }),
        }
    }
}

/// Validated data for a task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Display name.
    pub name: TaskName,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Priority, higher is more urgent.
    pub priority: u32,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Initial ownership.
    pub assignment: TaskAssignment,
}

/// Descriptive fields to change on an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    name: Option<TaskName>,
    description: Option<String>,
    priority: Option<u32>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskChanges {
    /// Creates a change set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUpdate`] when no field is set.
    pub fn new(
        name: Option<TaskName>,
        description: Option<String>,
        priority: Option<u32>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Self, TaskDomainError> {
        if name.is_none() && description.is_none() && priority.is_none() && due_date.is_none()
        {
            return Err(TaskDomainError::EmptyUpdate);
        }
        Ok(Self {
            name,
            description,
            priority,
            due_date,
        })
    }

    /// Returns the new name, if changed.
    #[must_use]
    pub const fn name(&self) -> Option<&TaskName> {
        self.name.as_ref()
    }

    /// Returns the new description, if changed.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the new priority, if changed.
    #[must_use]
    pub const fn priority(&self) -> Option<u32> {
        self.priority
    }

    /// Returns the new due date, if changed.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub(super) fn into_parts(
        self,
    ) -> (
        Option<TaskName>,
        Option<String>,
        Option<u32>,
        Option<DateTime<Utc>>,
    ) {
        (self.name, self.description, self.priority, self.due_date)
    }
}
