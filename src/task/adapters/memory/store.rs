//! In-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Page, Pageable, Task, TaskId, TaskPrecondition},
    policy::TaskVisibility,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        state.insertion_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn compare_and_update(
        &self,
        expected: TaskPrecondition,
        task: &Task,
    ) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        if stored.precondition() != expected {
            return Err(TaskStoreError::Conflict(task.id()));
        }
        *stored = task.clone();
        Ok(())
    }

    async fn query(
        &self,
        visibility: &TaskVisibility,
        pageable: Pageable,
    ) -> TaskStoreResult<Page<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut total_items = 0_usize;
        let mut content = Vec::new();
        let matching = state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| visibility.matches(task));
        for task in matching {
            if total_items >= pageable.offset() && content.len() < pageable.size() {
                content.push(task.clone());
            }
            total_items += 1;
        }
        Ok(Page::new(content, total_items))
    }
}
