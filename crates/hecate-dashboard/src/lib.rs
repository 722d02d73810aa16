/*
[INPUT]:  Public API exports for hecate-dashboard crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cluster;
pub mod config;
pub mod creator;
pub mod form;
pub mod logging;
pub mod status;
pub mod ui;

// Re-export main types for convenience
pub use cluster::{ClusterPanel, PanelAction};
pub use config::DashboardConfig;
pub use creator::{HttpTaskCreator, TaskCreator};
pub use form::{DraftUpdate, FormError, FormState, TaskFormController};
pub use status::{StatusFlags, StatusLevel, StatusTooltip};
pub use ui::components::task_form::{FormAction, FormVariant, TaskFormView};
