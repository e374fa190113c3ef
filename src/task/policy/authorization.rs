//! Which mutations a caller may perform on a visible task.

use super::is_offered_to;
use crate::security::domain::Principal;
use crate::task::domain::{Task, TaskAction};
use serde::{Deserialize, Serialize};

/// Who may delete a task that has no assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclaimedDeletionPolicy {
    /// Candidate users and members of candidate groups.
    #[default]
    Candidates,
    /// Candidates and the task's creator.
    CandidatesAndCreator,
    /// Administrators only.
    AdminOnly,
}

/// Returns whether `principal` is a candidate for the unassigned `task`.
#[must_use]
pub fn is_candidate(principal: &Principal, task: &Task) -> bool {
    !task.is_assigned() && is_offered_to(principal, task)
}

/// Per-action authorization rules for the user scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorizationPolicy {
    unclaimed_deletion: UnclaimedDeletionPolicy,
}

impl AuthorizationPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(unclaimed_deletion: UnclaimedDeletionPolicy) -> Self {
        Self { unclaimed_deletion }
    }

    /// Returns the unclaimed-deletion rule.
    #[must_use]
    pub const fn unclaimed_deletion(&self) -> UnclaimedDeletionPolicy {
        self.unclaimed_deletion
    }

    /// Returns whether `principal` may perform `action` on `task`.
    ///
    /// Status is not considered here; the transition table decides whether
    /// the action is possible at all.
    #[must_use]
    pub fn permits(&self, principal: &Principal, task: &Task, action: TaskAction) -> bool {
        if principal.is_admin() {
            return true;
        }
        let is_assignee = task.is_assignee(principal.id());
        match action {
            TaskAction::Claim => is_candidate(principal, task),
            TaskAction::Assign => is_assignee || is_candidate(principal, task),
            TaskAction::Complete => is_assignee,
            TaskAction::Update => {
                is_assignee || (!task.is_assigned() && task.creator() == principal.id())
            }
            TaskAction::Delete => is_assignee || self.may_delete_unclaimed(principal, task),
        }
    }

    fn may_delete_unclaimed(&self, principal: &Principal, task: &Task) -> bool {
        if task.is_assigned() {
            return false;
        }
        match self.unclaimed_deletion {
            UnclaimedDeletionPolicy::Candidates => is_candidate(principal, task),
            UnclaimedDeletionPolicy::CandidatesAndCreator => {
                is_candidate(principal, task) || task.creator() == principal.id()
            }
            UnclaimedDeletionPolicy::AdminOnly => false,
        }
    }
}
