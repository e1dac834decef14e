//! Capabilities implemented over the application event channel.

use dockpanel_core::{Confirm, Refresh};
use tokio::sync::oneshot;

use crate::event::{AppEvent, EventSender};

/// Asks for confirmation through the dashboard's modal.
#[derive(Debug, Clone)]
pub struct ChannelConfirm {
    tx: EventSender,
}

impl ChannelConfirm {
    /// Creates a confirmer that posts prompts to the application loop.
    #[must_use]
    pub const fn new(tx: EventSender) -> Self {
        Self { tx }
    }
}

impl Confirm for ChannelConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = AppEvent::ConfirmRequested {
            prompt: prompt.to_string(),
            reply,
        };
        if self.tx.send(request).is_err() {
            return false;
        }
        // A dropped reply means the dashboard closed with the modal open.
        answer.await.unwrap_or(false)
    }
}

/// Requests a container list refresh from the application loop.
#[derive(Debug, Clone)]
pub struct ChannelRefresh {
    tx: EventSender,
}

impl ChannelRefresh {
    /// Creates a refresher that posts to the application loop.
    #[must_use]
    pub const fn new(tx: EventSender) -> Self {
        Self { tx }
    }
}

impl Refresh for ChannelRefresh {
    fn refresh(&self) {
        if self.tx.send(AppEvent::Refresh).is_err() {
            tracing::debug!("refresh requested after dashboard closed");
        }
    }
}
