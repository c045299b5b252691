//! In-memory task store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{TaskId, TaskRecord},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    records: HashMap<TaskId, TaskRecord>,
    order: Vec<TaskId>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        Ok(self.read()?.order.len())
    }

    /// Returns `true` when the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add(&self, record: TaskRecord) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let id = record.id();
        if state.records.contains_key(&id) {
            return Err(TaskStoreError::DuplicateTask(id));
        }
        state.order.push(id);
        state.records.insert(id, record);
        Ok(())
    }

    fn update(&self, record: TaskRecord) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        let slot = state
            .records
            .get_mut(&record.id())
            .ok_or(TaskStoreError::NotFound(record.id()))?;
        *slot = record;
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskRecord>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    fn list(&self) -> TaskStoreResult<Vec<TaskRecord>> {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.records.get(id).cloned())
            .collect())
    }
}
