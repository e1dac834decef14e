//! # dockpanel-core
//!
//! Front-end independent behaviour of the dashboard.
//!
//! Provides:
//! - [`Dispatcher`](dispatcher::Dispatcher): turns a user action into one API
//!   call and reflects the outcome on the notification surface.
//! - [`Notifier`](notify::Notifier): the single-slot, auto-hiding notification.
//! - [`RefreshLoop`](refresh::RefreshLoop): periodic passive refresh.
//! - [`Confirm`](capability::Confirm) and [`Refresh`](capability::Refresh):
//!   capabilities the front-end injects.
//!
//! All timers are tokio tasks owned by the value that created them and are
//! aborted when that value is dropped. Showing a notification, dispatching,
//! and starting a refresh loop must happen inside a tokio runtime.

pub mod capability;
pub mod dispatcher;
pub mod notify;
pub mod refresh;
pub mod schedule;

pub use capability::{AssumeYes, Confirm, Refresh};
pub use dispatcher::{ActionOutcome, Dispatcher};
pub use notify::Notifier;
pub use refresh::RefreshLoop;
