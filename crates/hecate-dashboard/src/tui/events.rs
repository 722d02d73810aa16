/*
[INPUT]:  Crossterm key events and the active overlay
[OUTPUT]: Key routing into the task form, cluster panel, or dashboard hotkeys
[POS]:    TUI event handling
[UPDATE]: When adding hotkeys or overlays
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hecate_dashboard::{FormAction, PanelAction};

use super::app::{AppState, Overlay};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.overlay.as_mut() {
        Some(Overlay::TaskForm { view, .. }) => {
            match view.handle_key(key.code, app.is_loading) {
                FormAction::Submit => app.start_submission(),
                // the close callback removes the overlay through FormClosed
                FormAction::Cancelled => app.status_message = "task creation cancelled".to_string(),
                FormAction::None => {}
            }
            false
        }
        Some(Overlay::Cluster(panel)) => {
            match panel.handle_key(key.code) {
                PanelAction::Close => app.close_overlay(),
                PanelAction::DiveToCrossroads(cluster_id) => app.dive_to_crossroads(&cluster_id),
                PanelAction::None => {}
            }
            false
        }
        None => handle_dashboard_key(app, key.code),
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('n') | KeyCode::Char('t') => {
            app.open_task_form();
            false
        }
        KeyCode::Enter => {
            app.open_selected_cluster();
            false
        }
        KeyCode::Char('s') => {
            app.show_status = !app.show_status;
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}
