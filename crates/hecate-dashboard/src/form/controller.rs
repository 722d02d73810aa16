/*
[INPUT]:  DraftUpdate edits, an injected TaskCreator, a close callback
[OUTPUT]: Owned TaskDraft, single error slot, Idle/Submitting/Error state
[POS]:    Form layer - task draft form controller
[UPDATE]: When the submission workflow or state transitions change
*/

use std::fmt;
use std::sync::Arc;

use anyhow::Result as AnyResult;
use hecate_client::TaskDraft;
use tracing::{debug, info, warn};

use super::draft::{DraftUpdate, is_submittable, validate_draft};
use super::error::FormError;
use crate::creator::TaskCreator;

/// Invoked on cancel and after every successful submission.
pub type CloseCallback = Box<dyn FnMut() + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    /// The last attempt failed and nothing has been edited since.
    Error,
}

/// Owns a task draft for the lifetime of one form.
///
/// Re-entrant submissions are the caller's concern: the controller does not
/// debounce and expects the caller to stop triggering submit while its
/// loading flag is set.
pub struct TaskFormController {
    draft: TaskDraft,
    error: Option<FormError>,
    state: FormState,
    creator: Arc<dyn TaskCreator>,
    on_close: CloseCallback,
}

impl TaskFormController {
    pub fn new(creator: Arc<dyn TaskCreator>, on_close: CloseCallback) -> Self {
        Self {
            draft: TaskDraft::default(),
            error: None,
            state: FormState::Idle,
            creator,
            on_close,
        }
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Trimmed name and description are both non-empty.
    pub fn can_submit(&self) -> bool {
        is_submittable(&self.draft)
    }

    /// Shared handle to the injected creation operation, for callers that
    /// drive `begin_submit`/`finish_submit` themselves.
    pub fn creator(&self) -> Arc<dyn TaskCreator> {
        Arc::clone(&self.creator)
    }

    pub fn update_field(&mut self, update: DraftUpdate) {
        update.apply(&mut self.draft);
        if self.state == FormState::Error {
            self.state = FormState::Idle;
        }
    }

    pub fn cancel(&mut self) {
        (self.on_close)();
    }

    /// Validate and run the creation operation to completion.
    ///
    /// `Ok(true)`: created, form closed and draft reset. `Ok(false)`: not
    /// created, draft kept. `Err`: the error now held in the error slot.
    pub async fn submit(&mut self) -> Result<bool, FormError> {
        let draft = self.begin_submit()?;
        let outcome = self.creator.create_task(draft).await;
        self.finish_submit(outcome)
    }

    /// First half of `submit`: clear the error slot, validate, and enter
    /// `Submitting`. Returns the draft snapshot to hand to the creator.
    pub fn begin_submit(&mut self) -> Result<TaskDraft, FormError> {
        self.error = None;
        if let Err(err) = validate_draft(&self.draft) {
            debug!(error = %err, "task draft failed validation");
            self.error = Some(err.clone());
            self.state = FormState::Error;
            return Err(err);
        }
        self.state = FormState::Submitting;
        Ok(self.draft.clone())
    }

    /// Second half of `submit`: apply the creation operation's settlement.
    pub fn finish_submit(&mut self, outcome: AnyResult<bool>) -> Result<bool, FormError> {
        if self.state != FormState::Submitting {
            warn!(state = ?self.state, "submission settled outside of Submitting");
        }

        match outcome {
            Ok(true) => {
                info!(name = %self.draft.name, "task submitted");
                self.state = FormState::Idle;
                (self.on_close)();
                self.draft = TaskDraft::default();
                Ok(true)
            }
            Ok(false) => {
                debug!(name = %self.draft.name, "task not created; keeping draft");
                self.state = FormState::Idle;
                Ok(false)
            }
            Err(err) => {
                let err = FormError::SubmissionFailed(err.to_string());
                warn!(error = %err, "task submission failed");
                self.error = Some(err.clone());
                self.state = FormState::Error;
                Err(err)
            }
        }
    }
}

impl fmt::Debug for TaskFormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskFormController")
            .field("draft", &self.draft)
            .field("error", &self.error)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
