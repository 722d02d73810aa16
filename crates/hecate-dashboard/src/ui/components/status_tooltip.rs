/*
[INPUT]:  StatusTooltip view model and an anchor area
[OUTPUT]: Small status popup rendered under the anchor's right edge
[POS]:    TUI component for the status tooltip
[UPDATE]: When tooltip lines or placement change
*/

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::status::{StatusLevel, StatusTooltip};
use crate::ui::label_style;

const TOOLTIP_WIDTH: u16 = 40;

pub fn level_style(level: StatusLevel) -> Style {
    let color = match level {
        StatusLevel::Healthy => Color::LightGreen,
        StatusLevel::Busy => Color::Cyan,
        StatusLevel::Degraded => Color::Yellow,
        StatusLevel::Offline => Color::LightRed,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Where the tooltip lands: right-aligned to `anchor`, just below it,
/// clipped to `bounds`.
pub fn placement(anchor: Rect, tooltip: &StatusTooltip, bounds: Rect) -> Rect {
    let height = tooltip.lines.len() as u16 + 3;
    let width = TOOLTIP_WIDTH.min(bounds.width);
    let x = anchor
        .right()
        .min(bounds.right())
        .saturating_sub(width)
        .max(bounds.x);
    let y = anchor.bottom().min(bounds.bottom().saturating_sub(height));
    Rect::new(x, y, width, height.min(bounds.height)).intersection(bounds)
}

pub fn render(frame: &mut Frame, anchor: Rect, tooltip: &StatusTooltip) {
    let area = placement(anchor, tooltip, frame.area());
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(Span::styled(
        tooltip.level.label(),
        level_style(tooltip.level),
    ))];
    for line in &tooltip.lines {
        let value_style = if line.ok {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::LightRed)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", line.label), label_style()),
            Span::styled(line.value, value_style),
        ]));
    }

    let block = Block::default()
        .title("Status")
        .borders(Borders::ALL)
        .border_style(level_style(tooltip.level));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
