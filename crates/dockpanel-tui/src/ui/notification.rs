//! Toast line for the current notification.

use dockpanel_common::types::{Notification, Severity};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Renders the notification, or an empty frame when nothing is visible.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
    let Some(notification) = notification.filter(|n| n.visible) else {
        frame.render_widget(Block::bordered(), area);
        return;
    };

    let color = severity_color(notification.severity);
    let widget = Paragraph::new(notification.message.as_str())
        .style(Style::new().fg(color))
        .block(
            Block::bordered()
                .border_style(Style::new().fg(color))
                .title(format!(" {} ", notification.severity)),
        );
    frame.render_widget(widget, area);
}
