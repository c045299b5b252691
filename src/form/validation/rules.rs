//! Validation rules applied when a draft is submitted.
//!
//! Rules run in a fixed order: title, completeness, then date order. Each
//! rule is a pure function over the draft or its fields.

use crate::form::domain::{Draft, DraftField, Rejection};
use crate::task::domain::TaskFields;

/// Result of the completeness gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    /// Every field has a value.
    Complete(TaskFields),
    /// The listed non-title fields are empty.
    Missing(Vec<DraftField>),
}

/// Validates that the draft has a title.
///
/// Runs before any other rule and ignores the state of every other field.
///
/// # Errors
///
/// Returns [`Rejection::MissingTitle`] when the title is empty.
pub fn validate_title(draft: &Draft) -> Result<(), Rejection> {
    if draft.title().is_empty() {
        return Err(Rejection::MissingTitle);
    }
    Ok(())
}

/// Checks that every field of the draft holds a value.
#[must_use]
pub fn check_completeness(draft: &Draft) -> Completeness {
    draft.to_fields().map_or_else(
        || Completeness::Missing(draft.missing_fields()),
        Completeness::Complete,
    )
}

/// Validates that the start date does not sort after the end date.
///
/// Dates are compared as strings. `YYYY-MM-DD` values therefore order
/// chronologically; other formats order lexicographically.
///
/// # Errors
///
/// Returns [`Rejection::DateOrderViolation`] when `start_date > end_date`.
pub fn validate_date_order(fields: &TaskFields) -> Result<(), Rejection> {
    if fields.start_date > fields.end_date {
        return Err(Rejection::DateOrderViolation {
            start_date: fields.start_date.clone(),
            end_date: fields.end_date.clone(),
        });
    }
    Ok(())
}
