//! Change detection for edit sessions.

use crate::form::domain::DraftField;
use crate::task::domain::{TaskFields, TaskRecord};

/// Fields whose draft value differs from the original record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changed: Vec<DraftField>,
}

impl ChangeSet {
    /// Returns the changed fields in form order.
    #[must_use]
    pub fn changed(&self) -> &[DraftField] {
        &self.changed
    }

    /// Returns `true` when no field differs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    /// Returns `true` when `field` differs.
    #[must_use]
    pub fn contains(&self, field: DraftField) -> bool {
        self.changed.contains(&field)
    }
}

/// Compares submitted fields against the original record.
///
/// Comparison is exact: strings are not trimmed or case-folded and dates
/// are not parsed.
#[must_use]
pub fn detect_changes(original: &TaskRecord, fields: &TaskFields) -> ChangeSet {
    let before = original.fields();
    let changed = DraftField::ALL
        .into_iter()
        .filter(|field| match field {
            DraftField::Title => before.title != fields.title,
            DraftField::Description => before.description != fields.description,
            DraftField::Status => before.status != fields.status,
            DraftField::StartDate => before.start_date != fields.start_date,
            DraftField::EndDate => before.end_date != fields.end_date,
        })
        .collect();
    ChangeSet { changed }
}
