/*
[INPUT]:  Module declarations for UI components.
[OUTPUT]: Public module exports for TUI component modules.
[POS]:    UI components module registry.
[UPDATE]: When adding or removing components.
*/
pub mod cluster_detail;
pub mod status_tooltip;
pub mod task_form;
