//! Frame layout and widget rendering.

pub mod container;
pub mod dashboard;
pub mod modal;
pub mod notification;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, View};

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("s", "start"),
    ("x", "stop"),
    ("r", "restart"),
    ("u", "update"),
    ("d", "describe"),
    ("Enter", "details"),
    ("F5", "refresh"),
    ("q", "quit"),
];

/// Renders the whole dashboard for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, toast, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let running = app.containers.iter().filter(|c| c.is_running()).count();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", dockpanel_common::constants::APP_NAME),
            Style::new().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} containers, {running} running",
            app.containers.len()
        )),
    ]);
    frame.render_widget(Paragraph::new(title), header);

    match app.current_view {
        View::Dashboard => dashboard::render_dashboard(frame, body, app),
        View::ContainerDetail => container::render_container_detail(frame, body, app),
    }

    notification::render_notification(frame, toast, app.notification.as_ref());

    let hints: Vec<Span<'_>> = KEY_HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key} "), Style::new().add_modifier(Modifier::REVERSED)),
                Span::raw(format!(" {label} ")),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(hints)), footer);

    if let Some(pending) = &app.confirm {
        modal::render_confirm(frame, &pending.prompt);
    }
}

#[cfg(test)]
pub(crate) fn render_to_string(app: &App, width: u16, height: u16) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let _ = terminal.draw(|frame| render(frame, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}
