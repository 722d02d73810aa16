/*
[INPUT]:  Validation outcomes and creation-operation failures
[OUTPUT]: FormError taxonomy shown in the form's single error slot
[POS]:    Form layer - error types
[UPDATE]: When validation rules or failure surfacing change
*/

use thiserror::Error;

/// Errors surfaced in the task form's error slot.
///
/// The `Display` text is exactly what the form shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Trimmed name is empty.
    #[error("Task name is required")]
    MissingName,

    /// Trimmed description is empty.
    #[error("Task description is required")]
    MissingDescription,

    /// The creation operation failed; carries the failure's message.
    #[error("{0}")]
    SubmissionFailed(String),
}
