//! Draft values edited during a form session.

use super::ParseDraftFieldError;
use crate::task::domain::{ParseTaskStatusError, TaskFields, TaskRecord, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Completion status.
    Status,
    /// Start date string.
    StartDate,
    /// End date string.
    EndDate,
}

impl DraftField {
    /// Every draft field in form order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Status,
        Self::StartDate,
        Self::EndDate,
    ];

    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }
}

impl TryFrom<&str> for DraftField {
    type Error = ParseDraftFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "status" => Ok(Self::Status),
            "start_date" | "startDate" => Ok(Self::StartDate),
            "end_date" | "endDate" => Ok(Self::EndDate),
            _ => Err(ParseDraftFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient field values for one form session.
///
/// A draft may be incomplete at any time. Nothing here validates values;
/// that happens only when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    title: String,
    description: String,
    status: Option<TaskStatus>,
    start_date: String,
    end_date: String,
}

impl Draft {
    /// Creates an empty draft with status [`TaskStatus::Incomplete`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: Some(TaskStatus::Incomplete),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    /// Creates a draft holding a copy of a record's editable fields.
    #[must_use]
    pub fn from_record(record: &TaskRecord) -> Self {
        let fields = record.fields().clone();
        Self {
            title: fields.title,
            description: fields.description,
            status: Some(fields.status),
            start_date: fields.start_date,
            end_date: fields.end_date,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status, or `None` when it has been cleared.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the start date string.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the end date string.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Replaces one field.
    ///
    /// An empty status value clears the status.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when a non-empty status value names
    /// no known status. The draft is left unchanged.
    pub fn set(&mut self, field: DraftField, value: String) -> Result<(), ParseTaskStatusError> {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Status => {
                self.status = if value.is_empty() {
                    None
                } else {
                    Some(TaskStatus::try_from(value.as_str())?)
                };
            }
            DraftField::StartDate => self.start_date = value,
            DraftField::EndDate => self.end_date = value,
        }
        Ok(())
    }

    /// Returns `true` when the field holds no value.
    #[must_use]
    pub fn is_empty(&self, field: DraftField) -> bool {
        match field {
            DraftField::Title => self.title.is_empty(),
            DraftField::Description => self.description.is_empty(),
            DraftField::Status => self.status.is_none(),
            DraftField::StartDate => self.start_date.is_empty(),
            DraftField::EndDate => self.end_date.is_empty(),
        }
    }

    /// Returns the empty fields in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.is_empty(*field))
            .collect()
    }

    /// Converts the draft into record fields when every field is present.
    #[must_use]
    pub fn to_fields(&self) -> Option<TaskFields> {
        if !self.missing_fields().is_empty() {
            return None;
        }
        let status = self.status?;
        Some(TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            status,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        })
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::empty()
    }
}
