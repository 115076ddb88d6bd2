//! Domain Errors

use thiserror::Error;

/// Common result type for checklist operations
pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Checklist-level errors
///
/// None of these ever reach the user; callers recover locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChecklistError {
    /// A toggle named an id that is not in the current checklist
    #[error("no item with id {id} in checklist")]
    UnknownItem { id: u32 },
}
