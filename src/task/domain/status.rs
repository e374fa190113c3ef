//! Task status and the lifecycle transition table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task exists without an assignee and is offered to its candidates.
    Created,
    /// Task is owned by an assignee.
    Assigned,
    /// Task has been completed by its assignee.
    Completed,
    /// Task has been soft-deleted.
    Deleted,
}

impl TaskStatus {
    /// Statuses from which no action is accepted.
    pub const TERMINAL: [Self; 2] = [Self::Completed, Self::Deleted];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Assigned => "ASSIGNED",
            Self::Completed => "COMPLETED",
            Self::Deleted => "DELETED",
        }
    }

    /// Returns whether the status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Deleted)
    }

    /// Returns the status reached by applying `action`, or `None` when the
    /// action is not permitted from this status.
    ///
    /// This is the only place lifecycle edges are defined.
    #[must_use]
    pub const fn next(self, action: TaskAction) -> Option<Self> {
        match (self, action) {
            (Self::Created, TaskAction::Claim)
            | (Self::Created | Self::Assigned, TaskAction::Assign) => Some(Self::Assigned),
            (Self::Assigned, TaskAction::Complete) => Some(Self::Completed),
            (Self::Created | Self::Assigned, TaskAction::Delete) => Some(Self::Deleted),
            (Self::Created | Self::Assigned, TaskAction::Update) => Some(self),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "ASSIGNED" => Ok(Self::Assigned),
            "COMPLETED" => Ok(Self::Completed),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Mutating actions a caller may request on an existing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Take ownership of an unassigned task.
    Claim,
    /// Give ownership of a task to a named user.
    Assign,
    /// Finish an assigned task.
    Complete,
    /// Change descriptive fields.
    Update,
    /// Soft-delete a task.
    Delete,
}

impl TaskAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Claim,
        Self::Assign,
        Self::Complete,
        Self::Update,
        Self::Delete,
    ];

    /// Returns the lowercase verb for the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::Assign => "assign",
            Self::Complete => "complete",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
