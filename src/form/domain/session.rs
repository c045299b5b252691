//! Form session lifecycle types.

use super::{Draft, DraftField};
use crate::task::domain::{ParseTaskStatusError, TaskRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a session creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// The session will add a new record.
    Create,
    /// The session will update its original record.
    Edit,
}

impl SessionMode {
    /// Returns the canonical mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One open instance of the task entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    mode: SessionMode,
    original: Option<TaskRecord>,
    draft: Draft,
}

impl FormSession {
    /// Opens a session.
    ///
    /// An edit session with an original starts from a copy of the original's
    /// fields. Every other combination starts from an empty draft; a create
    /// session drops any original it is given.
    #[must_use]
    pub fn begin(mode: SessionMode, original: Option<TaskRecord>) -> Self {
        let original = match mode {
            SessionMode::Create => None,
            SessionMode::Edit => original,
        };
        let draft = original.as_ref().map_or_else(Draft::empty, Draft::from_record);
        Self {
            mode,
            original,
            draft,
        }
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Returns the record an edit session started from.
    #[must_use]
    pub const fn original(&self) -> Option<&TaskRecord> {
        self.original.as_ref()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replaces one draft field.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] when a status value is not
    /// recognised.
    pub fn set_field(
        &mut self,
        field: DraftField,
        value: String,
    ) -> Result<(), ParseTaskStatusError> {
        self.draft.set(field, value)
    }
}
