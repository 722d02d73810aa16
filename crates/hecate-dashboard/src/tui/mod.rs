/*
[INPUT]:  Dashboard config, task API client, task creator, log buffer
[OUTPUT]: Ratatui-based dashboard with cluster list, task form, and logs
[POS]:    TUI module for hecate-dashboard binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::run_tui;
