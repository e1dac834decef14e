//! Confirmation modal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draws the prompt over whatever is below it.
pub fn render_confirm(frame: &mut Frame, prompt: &str) {
    let area = centered(frame.area(), 60, 7);
    let text = vec![
        Line::raw(""),
        Line::raw(prompt),
        Line::raw(""),
        Line::styled("[y] confirm   [n] cancel", Style::new().add_modifier(Modifier::DIM)),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(" Confirm ")
                .border_style(Style::new().fg(Color::Yellow)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
