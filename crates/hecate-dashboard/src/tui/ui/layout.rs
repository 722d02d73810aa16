/*
[INPUT]:  AppState clusters, status flags, and status message
[OUTPUT]: Header bar, cluster list, and hotkey footer
[POS]:    TUI UI layout panels
[UPDATE]: When dashboard panels or hotkeys change
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use hecate_client::ClusterStatus;
use hecate_dashboard::StatusTooltip;
use hecate_dashboard::ui::components::status_tooltip::level_style;
use hecate_dashboard::ui::{border_style, header_style};

use crate::tui::app::AppState;

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let tooltip = StatusTooltip::from_flags(app.status_flags());
    let line = Line::from(vec![
        Span::styled(" HECATE ", header_style()),
        Span::raw("  "),
        Span::styled("● ", level_style(tooltip.level)),
        Span::styled(tooltip.level.label(), level_style(tooltip.level)),
        Span::raw(format!("  |  clusters: {}", app.clusters.len())),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Dashboard"),
    );
    frame.render_widget(widget, area);
}

fn cluster_status_style(status: ClusterStatus) -> Style {
    match status {
        ClusterStatus::Active => Style::default().fg(Color::LightGreen),
        ClusterStatus::Idle => Style::default().fg(Color::Gray),
        ClusterStatus::Degraded => Style::default().fg(Color::Yellow),
        ClusterStatus::Offline => Style::default().fg(Color::LightRed),
    }
}

pub(in crate::tui) fn draw_cluster_list(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    let items = if app.clusters.is_empty() {
        vec![ListItem::new("No clusters configured")]
    } else {
        app.clusters
            .iter()
            .map(|cluster| {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", cluster_status_style(cluster.status)),
                    Span::raw(format!("{} ", cluster.name)),
                    Span::styled(
                        format!("({} nodes)", cluster.node_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Clusters"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

pub(in crate::tui) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Cluster  "),
        Span::styled("[n]", key_style),
        Span::raw(" New Task  "),
        Span::styled("[s]", key_style),
        Span::raw(" Status  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit"),
    ]);
    let line2 = Line::from(Span::raw(format!("Status: {}", app.status_message)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
