//! User-scoped and admin facades over the lifecycle service.
//!
//! Both facades expose the same operations and take the acting principal
//! explicitly. [`TaskRuntime`] applies visibility and authorization rules;
//! [`TaskAdminRuntime`] bypasses them for principals holding the admin role.

use super::{
    AssignTaskRequest, CreateTaskRequest, DeleteTaskRequest, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService, UpdateTaskRequest,
};
use crate::security::domain::Principal;
use crate::task::{
    domain::{Page, Pageable, Task, TaskId},
    policy::Caller,
    ports::TaskStore,
};
use mockable::Clock;

/// Task operations on behalf of an ordinary user.
pub struct TaskRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    lifecycle: TaskLifecycleService<S, C>,
}

impl<S, C> Clone for TaskRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl<S, C> TaskRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a user-scoped facade.
    #[must_use]
    pub const fn new(lifecycle: TaskLifecycleService<S, C>) -> Self {
        Self { lifecycle }
    }

    /// Creates a standalone task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::create`].
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.create(&Caller::user(principal), request).await
    }

    /// Returns a visible task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::task`].
    pub async fn task(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.task(&Caller::user(principal), id).await
    }

    /// Lists visible tasks.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::tasks`].
    pub async fn tasks(
        &self,
        principal: &Principal,
        pageable: Pageable,
    ) -> TaskLifecycleResult<Page<Task>> {
        self.lifecycle.tasks(&Caller::user(principal), pageable).await
    }

    /// Claims a task for the principal.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::claim`].
    pub async fn claim(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.claim(&Caller::user(principal), id).await
    }

    /// Hands a task to another user.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::assign`].
    pub async fn assign(
        &self,
        principal: &Principal,
        request: AssignTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.assign(&Caller::user(principal), request).await
    }

    /// Completes a task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::complete`].
    pub async fn complete(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.complete(&Caller::user(principal), id).await
    }

    /// Updates descriptive fields of a task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::update`].
    pub async fn update(
        &self,
        principal: &Principal,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.update(&Caller::user(principal), request).await
    }

    /// Soft-deletes a task.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::delete`].
    pub async fn delete(
        &self,
        principal: &Principal,
        request: DeleteTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.delete(&Caller::user(principal), request).await
    }
}

/// Task operations for administrators, across all users.
///
/// Every operation first checks that the principal holds the admin role and
/// fails with [`TaskLifecycleError::AdminRequired`] otherwise.
pub struct TaskAdminRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    lifecycle: TaskLifecycleService<S, C>,
}

impl<S, C> Clone for TaskAdminRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            lifecycle: self.lifecycle.clone(),
        }
    }
}

fn admin_caller(principal: &Principal) -> TaskLifecycleResult<Caller<'_>> {
    if principal.is_admin() {
        Ok(Caller::admin(principal))
    } else {
        Err(TaskLifecycleError::AdminRequired(principal.id().clone()))
    }
}

impl<S, C> TaskAdminRuntime<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates an admin facade.
    #[must_use]
    pub const fn new(lifecycle: TaskLifecycleService<S, C>) -> Self {
        Self { lifecycle }
    }

    /// Creates a standalone task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::create`].
    pub async fn create(
        &self,
        principal: &Principal,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.create(&admin_caller(principal)?, request).await
    }

    /// Returns any task, deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals and [`TaskLifecycleError::NotFound`] for unknown ids.
    pub async fn task(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.task(&admin_caller(principal)?, id).await
    }

    /// Lists every task, deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::tasks`].
    pub async fn tasks(
        &self,
        principal: &Principal,
        pageable: Pageable,
    ) -> TaskLifecycleResult<Page<Task>> {
        self.lifecycle.tasks(&admin_caller(principal)?, pageable).await
    }

    /// Claims any `CREATED` task for the principal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::claim`].
    pub async fn claim(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.claim(&admin_caller(principal)?, id).await
    }

    /// Assigns any live task to a user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::assign`].
    pub async fn assign(
        &self,
        principal: &Principal,
        request: AssignTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.assign(&admin_caller(principal)?, request).await
    }

    /// Completes any `ASSIGNED` task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::complete`].
    pub async fn complete(&self, principal: &Principal, id: TaskId) -> TaskLifecycleResult<Task> {
        self.lifecycle.complete(&admin_caller(principal)?, id).await
    }

    /// Updates any live task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::update`].
    pub async fn update(
        &self,
        principal: &Principal,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.update(&admin_caller(principal)?, request).await
    }

    /// Soft-deletes any live task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AdminRequired`] for non-admin
    /// principals; otherwise see [`TaskLifecycleService::delete`].
    pub async fn delete(
        &self,
        principal: &Principal,
        request: DeleteTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.lifecycle.delete(&admin_caller(principal)?, request).await
    }
}
