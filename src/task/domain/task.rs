//! Task aggregate root and related lifecycle types.

use super::{
    TaskAction, TaskAssignment, TaskChanges, TaskDomainError, TaskDraft, TaskId, TaskName,
    TaskStatus,
};
use crate::security::domain::{GroupId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Priority given to tasks that do not specify one.
pub const DEFAULT_PRIORITY: u32 = 50;

/// Status and revision a stored task must still have for an update to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskPrecondition {
    /// Expected stored status.
    pub status: TaskStatus,
    /// Expected stored revision.
    pub revision: u64,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: Option<String>,
    priority: u32,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    assignee: Option<UserId>,
    candidate_groups: BTreeSet<GroupId>,
    candidate_users: BTreeSet<UserId>,
    creator: UserId,
    reason: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    claimed_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    revision: u64,
}

impl Task {
    /// Creates a new task owned by `creator`.
    ///
    /// A direct assignment yields an [`TaskStatus::Assigned`] task; a
    /// candidate assignment yields a [`TaskStatus::Created`] task.
    #[must_use]
    pub fn new(draft: TaskDraft, creator: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let TaskDraft {
            name,
            description,
            priority,
            due_date,
            assignment,
        } = draft;

        let (status, assignee, claimed_at, candidate_groups, candidate_users) = match assignment {
            TaskAssignment::Direct(user) => (
                TaskStatus::Assigned,
                Some(user),
                Some(timestamp),
                BTreeSet::new(),
                BTreeSet::new(),
            ),
            TaskAssignment::Candidates { groups, users } => {
                (TaskStatus::Created, None, None, groups, users)
            }
        };

        Self {
            id: TaskId::new(),
            name,
            description,
            priority,
            due_date,
            status,
            assignee,
            candidate_groups,
            candidate_users,
            creator,
            reason: None,
            created_at: timestamp,
            updated_at: timestamp,
            claimed_at,
            completed_at: None,
            revision: 0,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&UserId> {
        self.assignee.as_ref()
    }

    /// Returns the candidate groups.
    #[must_use]
    pub const fn candidate_groups(&self) -> &BTreeSet<GroupId> {
        &self.candidate_groups
    }

    /// Returns the candidate users.
    #[must_use]
    pub const fn candidate_users(&self) -> &BTreeSet<UserId> {
        &self.candidate_users
    }

    /// Returns the user who created the task.
    #[must_use]
    pub const fn creator(&self) -> &UserId {
        &self.creator
    }

    /// Returns the deletion reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the current assignee took ownership.
    #[must_use]
    pub const fn claimed_at(&self) -> Option<DateTime<Utc>> {
        self.claimed_at
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the revision counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns whether the task has an assignee.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    /// Returns whether `user` is the current assignee.
    #[must_use]
    pub fn is_assignee(&self, user: &UserId) -> bool {
        self.assignee.as_ref() == Some(user)
    }

    /// Returns the precondition a store must match to accept a write of a
    /// task derived from this one.
    #[must_use]
    pub const fn precondition(&self) -> TaskPrecondition {
        TaskPrecondition {
            status: self.status,
            revision: self.revision,
        }
    }

    /// Claims the task for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task is
    /// [`TaskStatus::Created`] and unassigned.
    pub fn claim(&mut self, user: UserId, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let next = self.next_status(TaskAction::Claim)?;
        if self.assignee.is_some() {
            return Err(self.invalid_transition(TaskAction::Claim));
        }
        self.take_ownership(user, next, clock);
        Ok(())
    }

    /// Assigns the task to `user`, replacing any current assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// terminal.
    pub fn assign(&mut self, user: UserId, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let next = self.next_status(TaskAction::Assign)?;
        self.take_ownership(user, next, clock);
        Ok(())
    }

    /// Completes the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task is
    /// [`TaskStatus::Assigned`].
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let next = self.next_status(TaskAction::Complete)?;
        self.status = next;
        self.completed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Applies descriptive changes without altering the status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// terminal.
    pub fn update(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.next_status(TaskAction::Update)?;
        let (name, description, priority, due_date) = changes.into_parts();
        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_description) = description {
            self.description = Some(new_description);
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = Some(new_due_date);
        }
        self.touch(clock);
        Ok(())
    }

    /// Soft-deletes the task, recording an optional reason.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// already terminal.
    pub fn delete(
        &mut self,
        reason: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let next = self.next_status(TaskAction::Delete)?;
        self.status = next;
        self.reason = reason;
        self.touch(clock);
        Ok(())
    }

    fn next_status(&self, action: TaskAction) -> Result<TaskStatus, TaskDomainError> {
        self.status
            .next(action)
            .ok_or_else(|| self.invalid_transition(action))
    }

    const fn invalid_transition(&self, action: TaskAction) -> TaskDomainError {
        TaskDomainError::InvalidStateTransition {
            task_id: self.id,
            status: self.status,
            action,
        }
    }

    fn take_ownership(&mut self, user: UserId, status: TaskStatus, clock: &impl Clock) {
        self.assignee = Some(user);
        self.status = status;
        self.claimed_at = Some(clock.utc());
        self.touch(clock);
    }

    /// Records a successful mutation.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.revision = self.revision.saturating_add(1);
    }
}
