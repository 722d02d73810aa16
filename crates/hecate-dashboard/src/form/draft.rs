/*
[INPUT]:  TaskDraft record from hecate-client and single-field edits
[OUTPUT]: DraftUpdate edits, field limits, and draft validation
[POS]:    Form layer - draft mutation and validation rules
[UPDATE]: When draft fields or validation rules change
*/

use std::collections::BTreeMap;

use hecate_client::{TaskCategory, TaskDraft, TaskPriority, TaskType};

use super::error::FormError;

/// Maximum name length accepted by the input surface.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum description length accepted by the input surface.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// A replacement value for exactly one draft field.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Name(String),
    Description(String),
    TaskType(TaskType),
    Priority(TaskPriority),
    Category(TaskCategory),
    AutoStart(bool),
    RequiresApproval(bool),
    Parameters(BTreeMap<String, serde_json::Value>),
    Dependencies(Vec<String>),
}

impl DraftUpdate {
    /// Replace the targeted field. No other field is touched and no
    /// length checks are applied here.
    pub fn apply(self, draft: &mut TaskDraft) {
        match self {
            DraftUpdate::Name(value) => draft.name = value,
            DraftUpdate::Description(value) => draft.description = value,
            DraftUpdate::TaskType(value) => draft.task_type = value,
            DraftUpdate::Priority(value) => draft.priority = value,
            DraftUpdate::Category(value) => draft.category = value,
            DraftUpdate::AutoStart(value) => draft.auto_start = value,
            DraftUpdate::RequiresApproval(value) => draft.requires_approval = value,
            DraftUpdate::Parameters(value) => draft.parameters = value,
            DraftUpdate::Dependencies(value) => draft.dependencies = value,
        }
    }
}

/// Check the fields that gate submission, name first.
pub fn validate_draft(draft: &TaskDraft) -> Result<(), FormError> {
    if draft.name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if draft.description.trim().is_empty() {
        return Err(FormError::MissingDescription);
    }
    Ok(())
}

/// Whether the submit action should be enabled.
pub fn is_submittable(draft: &TaskDraft) -> bool {
    validate_draft(draft).is_ok()
}
