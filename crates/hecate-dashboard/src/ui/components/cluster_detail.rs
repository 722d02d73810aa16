/*
[INPUT]:  ClusterPanel view model, current time
[OUTPUT]: Cluster detail overlay rendering
[POS]:    TUI component for the cluster detail panel
[UPDATE]: When panel sections or hotkeys change
*/

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::cluster::{ClusterPanel, LOGS_PLACEHOLDER};
use crate::ui::{border_style, centered_rect, header_style, label_style};
use hecate_client::ClusterStatus;

fn status_style(status: ClusterStatus) -> Style {
    let color = match status {
        ClusterStatus::Active => Color::LightGreen,
        ClusterStatus::Idle => Color::Gray,
        ClusterStatus::Degraded => Color::Yellow,
        ClusterStatus::Offline => Color::LightRed,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn row(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<15}"), label_style()),
        value,
    ])
}

pub fn render(frame: &mut Frame, area: Rect, panel: &ClusterPanel, now: DateTime<Utc>) {
    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);

    // borders and padding eat four columns
    let title = panel.title(popup.width.saturating_sub(4) as usize);
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), header_style()))
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let overview = vec![
        row(
            "Status:",
            Span::styled(panel.status_label(), status_style(panel.cluster().status)),
        ),
        row("Health:", Span::raw(panel.health_label())),
        row("Nodes:", Span::raw(panel.nodes_label())),
        row("Tasks:", Span::raw(panel.tasks_label())),
        row("Last activity:", Span::raw(panel.last_activity_label(now))),
        row("Tags:", Span::raw(panel.tags_label())),
        row("ID:", Span::raw(panel.cluster().id.clone())),
    ];
    frame.render_widget(Paragraph::new(overview), sections[0]);

    let description = Paragraph::new(panel.description().to_string())
        .block(
            Block::default()
                .title("Description")
                .borders(Borders::TOP)
                .border_style(border_style()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(description, sections[1]);

    let logs = Paragraph::new(Span::styled(
        LOGS_PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
    ))
    .block(
        Block::default()
            .title("Logs")
            .borders(Borders::TOP)
            .border_style(border_style()),
    );
    frame.render_widget(logs, sections[2]);

    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hints = Line::from(vec![
        Span::styled("[d/Enter]", key_style),
        Span::raw(" Dive to Crossroads  "),
        Span::styled("[Esc/q]", key_style),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), sections[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::buffer_text;
    use chrono::Duration;
    use hecate_client::ClusterData;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn cluster() -> ClusterData {
        ClusterData {
            id: "cl-7".to_string(),
            name: "crossroads-east".to_string(),
            description: Some("Edge ingest cluster".to_string()),
            status: ClusterStatus::Degraded,
            node_count: 1,
            active_tasks: 4,
            health: 0.42,
            last_activity: None,
            tags: vec!["edge".to_string(), "ingest".to_string()],
        }
    }

    #[test]
    fn test_render_sections() {
        let now = Utc::now();
        let mut data = cluster();
        data.last_activity = Some(now - Duration::minutes(5));
        let panel = ClusterPanel::new(data);

        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &panel, now);
            })
            .unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Cluster: crossroads-east"));
        assert!(text.contains("Degraded"));
        assert!(text.contains("42%"));
        assert!(text.contains("1 node"));
        assert!(text.contains("4 active tasks"));
        assert!(text.contains("5m ago"));
        assert!(text.contains("edge, ingest"));
        assert!(text.contains("Edge ingest cluster"));
        assert!(text.contains(LOGS_PLACEHOLDER));
        assert!(text.contains("Dive to Crossroads"));
    }
}
