//! Single-slot notification surface with an auto-hide timer.
//!
//! Only one notification exists at a time. Every [`Notifier::show`] call
//! overwrites it and restarts the hide timer; a timer left over from an
//! earlier message never hides a later one.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dockpanel_common::constants::NOTIFICATION_TTL_MS;
use dockpanel_common::types::{Notification, Severity};
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct HideTimer {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Owns the notification slot and its hide timer.
#[derive(Debug)]
pub struct Notifier {
    slot: Arc<watch::Sender<Notification>>,
    timer: Arc<Mutex<HideTimer>>,
    ttl: Duration,
}

impl Notifier {
    /// Creates a notifier with the default five second lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_millis(NOTIFICATION_TTL_MS))
    }

    /// Creates a notifier whose messages stay visible for `ttl`.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        let (slot, _) = watch::channel(Notification {
            message: String::new(),
            severity: Severity::Info,
            visible: false,
        });
        Self {
            slot: Arc::new(slot),
            timer: Arc::new(Mutex::new(HideTimer::default())),
            ttl,
        }
    }

    /// Shows an informational message.
    pub fn notify(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    /// Replaces the current notification and restarts the hide timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }
        timer.generation = timer.generation.wrapping_add(1);
        let generation = timer.generation;

        let _ = self.slot.send_replace(Notification::new(message, severity));

        let slot = Arc::clone(&self.slot);
        let shared = Arc::clone(&self.timer);
        let ttl = self.ttl;
        timer.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let current = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if current.generation == generation {
                slot.send_modify(|n| n.visible = false);
            }
        }));
    }

    /// Hides the current notification immediately.
    pub fn hide(&self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }
        timer.generation = timer.generation.wrapping_add(1);
        let _ = self
            .slot
            .send_if_modified(|n| std::mem::replace(&mut n.visible, false));
    }

    /// Returns the visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        let slot = self.slot.borrow();
        slot.visible.then(|| (*slot).clone())
    }

    /// Returns the slot contents, visible or not.
    pub fn snapshot(&self) -> Notification {
        (*self.slot.borrow()).clone()
    }

    /// Subscribes to changes of the notification slot.
    pub fn subscribe(&self) -> watch::Receiver<Notification> {
        self.slot.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        let mut timer = self.timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn show_makes_message_visible() {
        let notifier = Notifier::new();
        assert!(notifier.current().is_none());

        notifier.show("Container web started", Severity::Success);

        let current = notifier.current().expect("visible");
        assert_eq!(current.message, "Container web started");
        assert_eq!(current.severity, Severity::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn notify_defaults_to_info() {
        let notifier = Notifier::new();
        notifier.notify("Generating AI description...");
        assert_eq!(notifier.current().expect("visible").severity, Severity::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn message_hides_after_ttl() {
        let notifier = Notifier::new();
        notifier.show("hello", Severity::Info);

        tokio::time::sleep(Duration::from_millis(4_999)).await;
        assert!(notifier.current().is_some());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(notifier.current().is_none());
        assert_eq!(notifier.snapshot().message, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn later_message_outlives_earlier_timer() {
        let notifier = Notifier::new();
        notifier.show("first", Severity::Info);

        tokio::time::sleep(Duration::from_millis(3_000)).await;
        notifier.show("second", Severity::Error);

        // The first message's timer would have fired at 5000 ms.
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let current = notifier.current().expect("second still visible");
        assert_eq!(current.message, "second");
        assert_eq!(current.severity, Severity::Error);

        tokio::time::sleep(Duration::from_millis(2_600)).await;
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn hide_is_immediate() {
        let notifier = Notifier::new();
        notifier.show("bye", Severity::Success);
        notifier.hide();
        assert!(notifier.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_changes() {
        let notifier = Notifier::with_ttl(Duration::from_millis(100));
        let mut rx = notifier.subscribe();

        notifier.show("ping", Severity::Info);
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow_and_update().visible);

        rx.changed().await.expect("sender alive");
        assert!(!rx.borrow_and_update().visible);
    }
}
