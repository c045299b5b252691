//! Store port for persisted task records.

use crate::task::domain::{TaskId, TaskRecord};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task record persistence contract.
///
/// Records are keyed by [`TaskId`]: `add` appends and `update` replaces.
/// The form core never calls a store directly; it emits [`TaskCommand`]
/// values which the caller applies.
///
/// [`TaskCommand`]: crate::form::domain::TaskCommand
pub trait TaskStore: Send + Sync {
    /// Appends a new record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when a record with the same
    /// identifier already exists.
    fn add(&self, record: TaskRecord) -> TaskStoreResult<()>;

    /// Replaces the record sharing `record`'s identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no record has the
    /// identifier.
    fn update(&self, record: TaskRecord) -> TaskStoreResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskRecord>>;

    /// Returns all records in insertion order.
    fn list(&self) -> TaskStoreResult<Vec<TaskRecord>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A record with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The record was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
