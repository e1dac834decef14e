//! Main dashboard layout showing container overview.
//!
//! Displays a table of all containers with their status, image, URL,
//! and description.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Row, Table, TableState};

use crate::app::App;

/// Colour used for a container status.
pub(crate) fn status_color(status: &str) -> Color {
    match status {
        "running" => Color::Green,
        "restarting" | "paused" | "created" => Color::Yellow,
        _ => Color::Red,
    }
}

/// Renders the main dashboard view.
pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Containers ");

    if app.containers.is_empty() {
        let text = if app.loaded {
            "No containers found."
        } else {
            "Loading containers..."
        };
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header = Row::new(["NAME", "ID", "IMAGE", "STATUS", "URL", "DESCRIPTION"])
        .style(Style::new().add_modifier(Modifier::BOLD));

    let rows = app.containers.iter().map(|c| {
        Row::new(vec![
            Span::raw(c.name.clone()),
            Span::raw(c.id.to_string()),
            Span::raw(c.image.clone()),
            Span::styled(c.status.clone(), Style::new().fg(status_color(&c.status))),
            Span::raw(c.url.clone().unwrap_or_else(|| "-".to_string())),
            Span::raw(c.description.clone()),
        ])
    });

    let widths = [
        Constraint::Length(18),
        Constraint::Length(13),
        Constraint::Length(22),
        Constraint::Length(10),
        Constraint::Length(26),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
