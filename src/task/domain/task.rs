//! Task record aggregate and its editable fields.

use super::{ParseTaskStatusError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a task record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    #[default]
    Incomplete,
    /// The task has been finished.
    Complete,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five user-editable fields of a task record.
///
/// Dates are kept as comparable date strings (`YYYY-MM-DD`). They are
/// ordered and compared as plain strings, never parsed as calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Short task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion status.
    pub status: TaskStatus,
    /// First day of the task.
    pub start_date: String,
    /// Last day of the task.
    pub end_date: String,
}

/// Persisted to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
    created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a new record with the given identifier, stamped with the
    /// current clock time.
    #[must_use]
    pub fn new(id: TaskId, fields: TaskFields, clock: &impl Clock) -> Self {
        Self {
            id,
            fields,
            created_at: clock.utc(),
        }
    }

    /// Returns a copy of this record with its editable fields replaced.
    ///
    /// The identifier and creation timestamp are carried over unchanged.
    #[must_use]
    pub fn with_fields(&self, fields: TaskFields) -> Self {
        Self {
            id: self.id,
            fields,
            created_at: self.created_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.fields.status
    }

    /// Returns the start date string.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.fields.start_date
    }

    /// Returns the end date string.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.fields.end_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
