//! Formatted output helpers for CLI commands.
//!
//! Provides consistent table formatting for container listings and a
//! single-line rendering of notifications.

use dockpanel_common::types::{ContainerSummary, Notification};

/// Shortens `text` to `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Formats a notification as `[severity] message`.
#[must_use]
pub fn format_notification(notification: &Notification) -> String {
    format!("[{}] {}", notification.severity, notification.message)
}

/// Formats the table header. `all_columns` adds URL and description.
#[must_use]
pub fn format_header(all_columns: bool) -> String {
    let base = format!(
        "{:<14} {:<20} {:<24} {:<10}",
        "CONTAINER ID", "NAME", "IMAGE", "STATUS"
    );
    if all_columns {
        format!("{base} {:<28} DESCRIPTION", "URL")
    } else {
        base.trim_end().to_string()
    }
}

/// Formats one table row for a container.
#[must_use]
pub fn format_row(c: &ContainerSummary, all_columns: bool) -> String {
    let base = format!(
        "{:<14} {:<20} {:<24} {:<10}",
        truncate(c.id.as_str(), 14),
        truncate(&c.name, 20),
        truncate(&c.image, 24),
        truncate(&c.status, 10),
    );
    if all_columns {
        format!(
            "{base} {:<28} {}",
            c.url.as_deref().unwrap_or("-"),
            c.description
        )
    } else {
        base.trim_end().to_string()
    }
}

/// Prints a container table, or a notice when the list is empty.
pub fn print_containers(containers: &[ContainerSummary], all_columns: bool) {
    if containers.is_empty() {
        println!("No containers found.");
        return;
    }

    println!("{}", format_header(all_columns));
    for c in containers {
        println!("{}", format_row(c, all_columns));
    }
}
