/*
[INPUT]:  Draft edits, creation operation, close callback
[OUTPUT]: Task form controller and its supporting types
[POS]:    Form layer - module root
[UPDATE]: When form modules or exports change
*/

pub mod controller;
pub mod draft;
pub mod error;

pub use controller::{CloseCallback, FormState, TaskFormController};
pub use draft::{DESCRIPTION_MAX_LEN, DraftUpdate, NAME_MAX_LEN, is_submittable, validate_draft};
pub use error::FormError;
