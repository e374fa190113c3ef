//! Which tasks a caller may see.

use crate::security::domain::{GroupId, Principal, UserId};
use crate::task::domain::{Task, TaskStatus};
use std::collections::BTreeSet;

/// Scope an operation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessScope {
    /// Visibility and authorization rules apply.
    User,
    /// Every check passes; used by the admin facade.
    Admin,
}

/// A principal acting in a scope.
#[derive(Debug, Clone, Copy)]
pub struct Caller<'a> {
    principal: &'a Principal,
    scope: AccessScope,
}

impl<'a> Caller<'a> {
    /// Creates a caller in the user scope.
    #[must_use]
    pub const fn user(principal: &'a Principal) -> Self {
        Self {
            principal,
            scope: AccessScope::User,
        }
    }

    /// Creates a caller in the admin scope.
    #[must_use]
    pub const fn admin(principal: &'a Principal) -> Self {
        Self {
            principal,
            scope: AccessScope::Admin,
        }
    }

    /// Returns the acting principal.
    #[must_use]
    pub const fn principal(&self) -> &'a Principal {
        self.principal
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> AccessScope {
        self.scope
    }

    /// Returns whether the caller bypasses every check.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        matches!(self.scope, AccessScope::Admin)
    }

    /// Returns whether the caller may see `task`.
    #[must_use]
    pub fn can_see(&self, task: &Task) -> bool {
        self.is_unrestricted() || is_visible(self.principal, task)
    }

    /// Returns whether the caller may request a mutation of `task`.
    ///
    /// Besides visible tasks this admits live tasks once offered to the
    /// principal, so a candidate who lost a claim learns the new status
    /// instead of a missing task.
    #[must_use]
    pub fn can_act_on(&self, task: &Task) -> bool {
        self.can_see(task)
            || (task.status() != TaskStatus::Deleted && is_offered_to(self.principal, task))
    }
}

/// Returns whether `task` names `principal` as a candidate, directly or
/// through a group, regardless of its current assignee.
#[must_use]
pub fn is_offered_to(principal: &Principal, task: &Task) -> bool {
    task.candidate_users().contains(principal.id())
        || principal.is_member_of_any(task.candidate_groups())
}

/// Returns whether `principal` may see `task` in the user scope.
///
/// Deleted tasks are never visible here. Otherwise a task is visible to its
/// assignee, its creator, any administrator, and, while unassigned, to its
/// candidate users and members of its candidate groups.
#[must_use]
pub fn is_visible(principal: &Principal, task: &Task) -> bool {
    visible_to(principal.id(), principal.groups(), principal.is_admin(), task)
}

fn visible_to(user: &UserId, groups: &BTreeSet<GroupId>, admin: bool, task: &Task) -> bool {
    if task.status() == TaskStatus::Deleted {
        return false;
    }
    if admin || task.is_assignee(user) || task.creator() == user {
        return true;
    }
    !task.is_assigned()
        && (task.candidate_users().contains(user) || !task.candidate_groups().is_disjoint(groups))
}

/// Visibility filter handed to a task store.
///
/// Expressed as data so that stores other than the in-memory adapter can
/// translate it into their own query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskVisibility {
    /// Every task, deleted ones included.
    All,
    /// Tasks visible to one principal in the user scope.
    Principal {
        /// User identifier.
        user: UserId,
        /// Group memberships.
        groups: BTreeSet<GroupId>,
        /// Whether the principal is an administrator.
        admin: bool,
    },
}

impl TaskVisibility {
    /// Builds the filter for a caller.
    #[must_use]
    pub fn for_caller(caller: &Caller<'_>) -> Self {
        if caller.is_unrestricted() {
            return Self::All;
        }
        let principal = caller.principal();
        Self::Principal {
            user: principal.id().clone(),
            groups: principal.groups().clone(),
            admin: principal.is_admin(),
        }
    }

    /// Returns whether `task` passes the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Principal {
                user,
                groups,
                admin,
            } => visible_to(user, groups, *admin, task),
        }
    }
}
