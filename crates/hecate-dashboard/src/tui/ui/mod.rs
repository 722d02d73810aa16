/*
[INPUT]:  AppState snapshot, current time
[OUTPUT]: Full dashboard frame: header, clusters, logs, footer, overlays
[POS]:    TUI UI drawing entry point
[UPDATE]: When panels or overlays are added
*/

mod layout;
mod logs;

use chrono::Utc;
use ratatui::layout::{Constraint, Direction, Layout};

use hecate_dashboard::StatusTooltip;
use hecate_dashboard::ui::components::{cluster_detail, status_tooltip, task_form};

use super::app::{AppState, Overlay};
use layout::{draw_cluster_list, draw_footer, draw_header};
use logs::draw_logs;

pub(super) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, rows[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    draw_cluster_list(frame, middle[0], app);

    let embedded_form = matches!(
        &app.overlay,
        Some(Overlay::TaskForm { view, .. })
            if view.variant() == task_form::FormVariant::Embedded
    );
    if !embedded_form {
        draw_logs(frame, middle[1], &app.log_buffer);
    }

    draw_footer(frame, rows[2], app);

    match &app.overlay {
        Some(Overlay::TaskForm { view, .. }) => {
            // embedded replaces the logs panel, the other variants float over the body
            let target = if embedded_form { middle[1] } else { rows[1] };
            task_form::render(frame, target, view, app.is_loading);
        }
        Some(Overlay::Cluster(panel)) => {
            cluster_detail::render(frame, rows[1], panel, Utc::now());
        }
        None => {}
    }

    if app.show_status {
        let tooltip = StatusTooltip::from_flags(app.status_flags());
        status_tooltip::render(frame, rows[0], &tooltip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::AppEvent;
    use anyhow::Result;
    use async_trait::async_trait;
    use hecate_client::{ClusterData, ClusterStatus, TaskDraft};
    use hecate_dashboard::logging::LogBuffer;
    use hecate_dashboard::{FormVariant, TaskCreator};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    struct Unused;

    #[async_trait]
    impl TaskCreator for Unused {
        async fn create_task(&self, _draft: TaskDraft) -> Result<bool> {
            Ok(false)
        }
    }

    fn app(variant: FormVariant) -> (AppState, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let buffer = LogBuffer::handle(16);
        buffer
            .lock()
            .unwrap()
            .push_line("INFO starting hecate-dashboard".to_string());
        let cluster = ClusterData {
            id: "cl-1".to_string(),
            name: "crossroads-west".to_string(),
            description: None,
            status: ClusterStatus::Active,
            node_count: 3,
            active_tasks: 1,
            health: 0.9,
            last_activity: None,
            tags: Vec::new(),
        };
        let app = AppState::new(Arc::new(Unused), tx, buffer, vec![cluster], variant);
        (app, rx)
    }

    fn render(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| draw_ui(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_dashboard_panels() {
        let (mut app, _rx) = app(FormVariant::Default);
        let text = render(&mut app);
        assert!(text.contains("Clusters"));
        assert!(text.contains("crossroads-west"));
        assert!(text.contains("starting hecate-dashboard"));
        assert!(text.contains("Hotkeys"));
    }

    #[test]
    fn test_embedded_form_replaces_logs() {
        let (mut app, _rx) = app(FormVariant::Embedded);
        app.open_task_form();
        let text = render(&mut app);
        assert!(text.contains("Create Task"));
        assert!(!text.contains("starting hecate-dashboard"));
    }

    #[test]
    fn test_status_tooltip_overlay() {
        let (mut app, _rx) = app(FormVariant::Default);
        app.show_status = true;
        app.on_health(false);
        let text = render(&mut app);
        assert!(text.contains("Backend unreachable"));
    }
}
