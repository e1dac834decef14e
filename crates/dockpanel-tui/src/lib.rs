//! # dockpanel-tui
//!
//! Interactive terminal dashboard for a remote container-management API.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A container table with status, image, URL, and description.
//! - A detail view with port bindings for the selected container.
//! - Start, stop, restart, update, and description actions with a
//!   confirmation modal for destructive ones.
//! - A toast line for the current notification and a passive refresh loop.

pub mod app;
pub mod bridge;
pub mod event;
pub mod run;
pub mod ui;

pub use run::{TuiError, run};
