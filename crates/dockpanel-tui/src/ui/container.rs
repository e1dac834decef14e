//! Container detail view.
//!
//! Shows the selected container's identity, description, URL, and every
//! published port.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Row, Table, Wrap};

use crate::app::App;
use crate::ui::dashboard::status_color;

/// Renders the container detail view.
pub fn render_container_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(container) = app.selected() else {
        frame.render_widget(
            Paragraph::new("No container selected.").block(Block::bordered()),
            area,
        );
        return;
    };

    let [info_area, ports_area] =
        Layout::vertical([Constraint::Length(8), Constraint::Min(3)]).areas(area);

    let label = Style::new().add_modifier(Modifier::BOLD);
    let info = vec![
        Line::from(vec![Span::styled("Name:        ", label), Span::raw(&container.name)]),
        Line::from(vec![Span::styled("ID:          ", label), Span::raw(container.id.as_str())]),
        Line::from(vec![Span::styled("Image:       ", label), Span::raw(&container.image)]),
        Line::from(vec![
            Span::styled("Status:      ", label),
            Span::styled(&container.status, Style::new().fg(status_color(&container.status))),
        ]),
        Line::from(vec![
            Span::styled("URL:         ", label),
            Span::raw(container.url.as_deref().unwrap_or("-")),
        ]),
        Line::from(vec![
            Span::styled("Description: ", label),
            Span::raw(&container.description),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(info)
            .block(Block::bordered().title(format!(" {} ", container.name)))
            .wrap(Wrap { trim: true }),
        info_area,
    );

    let rows = container.ports.iter().map(|p| {
        Row::new(vec![
            p.container_port.clone(),
            p.host_ip.clone(),
            p.host_port.clone(),
        ])
    });
    let ports = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Fill(1),
        ],
    )
    .header(Row::new(["CONTAINER PORT", "HOST IP", "HOST PORT"]).style(label))
    .block(Block::bordered().title(" Ports "));
    frame.render_widget(ports, ports_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::app::tests::container;
    use crate::ui::render_to_string;

    #[test]
    fn shows_ports_and_description() {
        let mut app = App::new();
        app.set_containers(vec![container("aaa111", "web", "running")]);
        let _ = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = render_to_string(&app, 100, 24);
        assert!(screen.contains("Container: web"));
        assert!(screen.contains("80/tcp"));
        assert!(screen.contains("8080"));
        assert!(screen.contains("http://192.168.1.5:8080"));
    }
}
