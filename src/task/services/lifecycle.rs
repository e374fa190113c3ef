//! Task lifecycle engine: validated transitions under visibility and
//! authorization rules.

use super::{
    AssignTaskRequest, CreateTaskRequest, DeleteTaskRequest, TaskAdminRuntime, TaskRuntime,
    TaskRuntimeConfig, UpdateTaskRequest,
};
use crate::security::domain::{GroupId, SecurityDomainError, UserId};
use crate::task::{
    domain::{
        Page, Pageable, Task, TaskAction, TaskAssignment, TaskChanges, TaskDomainError, TaskDraft,
        TaskId, TaskName,
    },
    policy::{AuthorizationPolicy, Caller, TaskVisibility},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Coarse classification of lifecycle failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// The task is absent or not visible to the caller.
    NotFound,
    /// The action is not permitted from the task's status.
    InvalidState,
    /// The task is visible but the caller lacks rights for the action.
    NotAuthorized,
    /// The request payload is malformed.
    Validation,
    /// Concurrent writers kept changing the task.
    Conflict,
    /// The store failed.
    Store,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The task does not exist or is not visible to the caller.
    #[error("task {0} not found")]
    NotFound(TaskId),

    /// The caller may see the task but not perform the action.
    #[error("user {user} is not authorized to {action} task {task_id}")]
    NotAuthorized {
        /// Task identifier.
        task_id: TaskId,
        /// Acting user.
        user: UserId,
        /// Rejected action.
        action: TaskAction,
    },

    /// The admin facade was used by a principal without the admin role.
    #[error("user {0} is not an administrator")]
    AdminRequired(UserId),

    /// Compare-and-update kept failing because of concurrent writers.
    #[error("task {0} was modified concurrently too many times")]
    Conflict(TaskId),

    /// Domain validation or transition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// A user or group identifier in the request is malformed.
    #[error(transparent)]
    Identity(#[from] SecurityDomainError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl TaskLifecycleError {
    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::NotAuthorized { .. } | Self::AdminRequired(_) => TaskErrorKind::NotAuthorized,
            Self::Conflict(_) => TaskErrorKind::Conflict,
            Self::Domain(TaskDomainError::InvalidStateTransition { .. }) => {
                TaskErrorKind::InvalidState
            }
            Self::Domain(_) | Self::Identity(_) => TaskErrorKind::Validation,
            Self::Store(_) => TaskErrorKind::Store,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every by-id operation resolves visibility first (absent or invisible
/// tasks yield [`TaskLifecycleError::NotFound`]), then the status
/// transition, then authorization. Mutations also resolve live tasks the
/// caller was offered as a candidate. Writes go through compare-and-update
/// and are re-evaluated against fresh state on conflict.
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: TaskRuntimeConfig,
    authorization: AuthorizationPolicy,
}

impl<S, C> Clone for TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
            authorization: self.authorization,
        }
    }
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a lifecycle service with the default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, TaskRuntimeConfig::default())
    }

    /// Creates a lifecycle service with a custom configuration.
    #[must_use]
    pub const fn with_config(store: Arc<S>, clock: Arc<C>, config: TaskRuntimeConfig) -> Self {
        let authorization = config.authorization_policy();
        Self {
            store,
            clock,
            config,
            authorization,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskRuntimeConfig {
        &self.config
    }

    /// Returns a user-scoped facade sharing this service.
    #[must_use]
    pub fn runtime(&self) -> TaskRuntime<S, C> {
        TaskRuntime::new(self.clone())
    }

    /// Returns an admin facade sharing this service.
    #[must_use]
    pub fn admin_runtime(&self) -> TaskAdminRuntime<S, C> {
        TaskAdminRuntime::new(self.clone())
    }

    /// Creates a standalone task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] or
    /// [`TaskLifecycleError::Identity`] when the request is malformed, or
    /// [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn create(
        &self,
        caller: &Caller<'_>,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            name,
            description,
            priority,
            due_date,
            assignee,
            candidate_groups,
            candidate_users,
        } = request;

        let groups = candidate_groups
            .into_iter()
            .map(GroupId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let users = candidate_users
            .into_iter()
            .map(UserId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let direct = assignee.map(UserId::new).transpose()?;
        let draft = TaskDraft {
            name: TaskName::new(name)?,
            description,
            priority,
            due_date,
            assignment: TaskAssignment::resolve(direct, groups, users)?,
        };

        let task = Task::new(draft, caller.principal().id().clone(), &*self.clock);
        self.store.insert(&task).await?;
        info!(
            task_id = %task.id(),
            user = %caller.principal().id(),
            status = %task.status(),
            "task created"
        );
        Ok(task)
    }

    /// Returns a task visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task is absent or
    /// not visible, or [`TaskLifecycleError::Store`] when lookup fails.
    pub async fn task(&self, caller: &Caller<'_>, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_visible(caller, id).await
    }

    /// Lists tasks visible to the caller in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the query fails.
    pub async fn tasks(
        &self,
        caller: &Caller<'_>,
        pageable: Pageable,
    ) -> TaskLifecycleResult<Page<Task>> {
        let visibility = TaskVisibility::for_caller(caller);
        let page = pageable.clamped(self.config.max_page_size);
        Ok(self.store.query(&visibility, page).await?)
    }

    /// Claims an unassigned task for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for absent or invisible
    /// tasks, an invalid-state [`TaskLifecycleError::Domain`] error unless
    /// the task is `CREATED`, and [`TaskLifecycleError::NotAuthorized`] when
    /// the caller is not a candidate.
    pub async fn claim(&self, caller: &Caller<'_>, id: TaskId) -> TaskLifecycleResult<Task> {
        let user = caller.principal().id();
        self.apply(caller, id, TaskAction::Claim, |task| {
            task.claim(user.clone(), &*self.clock)
        })
        .await
    }

    /// Hands a task to the requested assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Identity`] for a malformed assignee,
    /// [`TaskLifecycleError::NotFound`] for absent or invisible tasks, an
    /// invalid-state error for terminal tasks, and
    /// [`TaskLifecycleError::NotAuthorized`] unless the caller is the current
    /// assignee or, while unassigned, a candidate.
    pub async fn assign(
        &self,
        caller: &Caller<'_>,
        request: AssignTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let assignee = UserId::new(request.assignee)?;
        self.apply(caller, request.task_id, TaskAction::Assign, |task| {
            task.assign(assignee.clone(), &*self.clock)
        })
        .await
    }

    /// Completes an assigned task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for absent or invisible
    /// tasks, an invalid-state error unless the task is `ASSIGNED`, and
    /// [`TaskLifecycleError::NotAuthorized`] unless the caller is the
    /// assignee.
    pub async fn complete(&self, caller: &Caller<'_>, id: TaskId) -> TaskLifecycleResult<Task> {
        self.apply(caller, id, TaskAction::Complete, |task| {
            task.complete(&*self.clock)
        })
        .await
    }

    /// Changes descriptive fields of a live task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an empty change set or a
    /// blank name, [`TaskLifecycleError::NotFound`] for absent or invisible
    /// tasks, an invalid-state error for terminal tasks, and
    /// [`TaskLifecycleError::NotAuthorized`] unless the caller is the
    /// assignee (or the creator of an unassigned task).
    pub async fn update(
        &self,
        caller: &Caller<'_>,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let UpdateTaskRequest {
            task_id,
            name,
            description,
            priority,
            due_date,
        } = request;
        let changes = TaskChanges::new(
            name.map(TaskName::new).transpose()?,
            description,
            priority,
            due_date,
        )?;
        self.apply(caller, task_id, TaskAction::Update, |task| {
            task.update(changes.clone(), &*self.clock)
        })
        .await
    }

    /// Soft-deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for absent or invisible
    /// tasks, an invalid-state error for terminal tasks, and
    /// [`TaskLifecycleError::NotAuthorized`] when the caller lacks delete
    /// rights.
    pub async fn delete(
        &self,
        caller: &Caller<'_>,
        request: DeleteTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let DeleteTaskRequest { task_id, reason } = request;
        self.apply(caller, task_id, TaskAction::Delete, |task| {
            task.delete(reason.clone(), &*self.clock)
        })
        .await
    }

    async fn find_visible(&self, caller: &Caller<'_>, id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self.load(id).await?;
        if !caller.can_see(&task) {
            debug!(
                task_id = %id,
                user = %caller.principal().id(),
                "task not visible to caller"
            );
            return Err(TaskLifecycleError::NotFound(id));
        }
        Ok(task)
    }

    fn authorize(
        &self,
        caller: &Caller<'_>,
        task: &Task,
        action: TaskAction,
    ) -> TaskLifecycleResult<()> {
        if caller.is_unrestricted()
            || self.authorization.permits(caller.principal(), task, action)
        {
            return Ok(());
        }
        Err(TaskLifecycleError::NotAuthorized {
            task_id: task.id(),
            user: caller.principal().id().clone(),
            action,
        })
    }

    /// Resolves a task the caller may act on: visible, or offered to the
    /// caller as a candidate and not deleted.
    async fn find_actionable(
        &self,
        caller: &Caller<'_>,
        id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        let task = self.load(id).await?;
        if !caller.can_act_on(&task) {
            debug!(
                task_id = %id,
                user = %caller.principal().id(),
                "task not visible to caller"
            );
            return Err(TaskLifecycleError::NotFound(id));
        }
        Ok(task)
    }

    /// Reads a task without any visibility check.
    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Resolves, transitions, authorizes, and writes a task. After a
    /// compare-and-update conflict the fresh record is re-evaluated without
    /// repeating the visibility check, so a lost race reports the new status.
    async fn apply<F>(
        &self,
        caller: &Caller<'_>,
        id: TaskId,
        action: TaskAction,
        transition: F,
    ) -> TaskLifecycleResult<Task>
    where
        F: Fn(&mut Task) -> Result<(), TaskDomainError>,
    {
        let mut conflicts = 0_u32;
        let mut current = self.find_actionable(caller, id).await?;
        loop {
            let mut updated = current.clone();
            transition(&mut updated)?;
            self.authorize(caller, &current, action)?;

            match self
                .store
                .compare_and_update(current.precondition(), &updated)
                .await
            {
                Ok(()) => {
                    info!(
                        task_id = %id,
                        user = %caller.principal().id(),
                        %action,
                        status = %updated.status(),
                        "task transitioned"
                    );
                    return Ok(updated);
                }
                Err(TaskStoreError::Conflict(_))
                    if conflicts < self.config.max_conflict_retries =>
                {
                    conflicts += 1;
                    debug!(
                        task_id = %id,
                        %action,
                        attempt = conflicts,
                        "task changed concurrently, re-evaluating"
                    );
                    current = self.load(id).await?;
                }
                Err(TaskStoreError::Conflict(_)) => {
                    warn!(
                        task_id = %id,
                        %action,
                        attempts = conflicts,
                        "giving up after repeated conflicts"
                    );
                    return Err(TaskLifecycleError::Conflict(id));
                }
                Err(TaskStoreError::NotFound(_)) => return Err(TaskLifecycleError::NotFound(id)),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
