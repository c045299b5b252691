//! Store mutation commands emitted by accepted submissions.

use crate::task::{
    domain::TaskRecord,
    ports::{TaskStore, TaskStoreResult},
};
use serde::{Deserialize, Serialize};

/// Intent for the external store to add or replace one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "record", rename_all = "snake_case")]
pub enum TaskCommand {
    /// Append a newly created record.
    Add(TaskRecord),
    /// Replace the record with the same identifier.
    Update(TaskRecord),
}

impl TaskCommand {
    /// Returns the record carried by the command.
    #[must_use]
    pub const fn record(&self) -> &TaskRecord {
        match self {
            Self::Add(record) | Self::Update(record) => record,
        }
    }

    /// Consumes the command and returns its record.
    #[must_use]
    pub fn into_record(self) -> TaskRecord {
        match self {
            Self::Add(record) | Self::Update(record) => record,
        }
    }

    /// Applies the command to a store.
    ///
    /// # Errors
    ///
    /// Propagates the store's error for the corresponding operation.
    pub fn apply_to<S>(self, store: &S) -> TaskStoreResult<()>
    where
        S: TaskStore + ?Sized,
    {
        match self {
            Self::Add(record) => store.add(record),
            Self::Update(record) => store.update(record),
        }
    }
}
