//! Error types for form operations.
//!
//! These are caller errors. Rejected submissions are not errors; they are
//! reported through [`SubmitOutcome`](super::SubmitOutcome).

use crate::task::domain::ParseTaskStatusError;
use thiserror::Error;

/// Errors returned by form service operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// The operation needs an open session but none is active.
    #[error("no form session is open")]
    NoOpenSession,

    /// An edit session was submitted without an original record.
    #[error("edit session has no original task record")]
    MissingOriginal,

    /// A status value does not name a known task status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// A field name does not name a draft field.
    #[error(transparent)]
    UnknownField(#[from] ParseDraftFieldError),
}

/// Result type for form service operations.
pub type FormResult<T> = Result<T, FormError>;

/// Error returned while parsing a draft field name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown draft field: {0}")]
pub struct ParseDraftFieldError(pub String);
