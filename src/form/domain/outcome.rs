//! Submission outcomes.

use super::{DraftField, TaskCommand};
use thiserror::Error;

/// Reason a submission was refused with a visible error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The title is empty.
    #[error("task title is required")]
    MissingTitle,

    /// One or more non-title fields are empty.
    ///
    /// Only produced when the form is configured to surface incomplete
    /// submissions.
    #[error("missing fields: {}", join_fields(.missing))]
    IncompleteForm {
        /// Empty fields in form order.
        missing: Vec<DraftField>,
    },

    /// The start date sorts after the end date.
    #[error("start date {start_date} is after end date {end_date}")]
    DateOrderViolation {
        /// Draft start date.
        start_date: String,
        /// Draft end date.
        end_date: String,
    },

    /// An edit session's draft equals its original record.
    #[error("no changes made")]
    NoChangeDetected,
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft was accepted; the session has closed.
    Dispatched(TaskCommand),
    /// The draft was refused; an error notification was sent and the
    /// session stays open.
    Rejected(Rejection),
    /// The draft is missing non-title fields; nothing was sent and the
    /// session stays open.
    Inert {
        /// Empty fields in form order.
        missing: Vec<DraftField>,
    },
}

impl SubmitOutcome {
    /// Returns the dispatched command, if any.
    #[must_use]
    pub const fn command(&self) -> Option<&TaskCommand> {
        match self {
            Self::Dispatched(command) => Some(command),
            Self::Rejected(_) | Self::Inert { .. } => None,
        }
    }

    /// Consumes the outcome and returns the dispatched command, if any.
    #[must_use]
    pub fn into_command(self) -> Option<TaskCommand> {
        match self {
            Self::Dispatched(command) => Some(command),
            Self::Rejected(_) | Self::Inert { .. } => None,
        }
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Dispatched(_) | Self::Inert { .. } => None,
        }
    }

    /// Returns `true` for a submission with no observable effect.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self, Self::Inert { .. })
    }
}
