//! Terminal and application event handling.
//!
//! Captures keyboard and resize events from the terminal on a dedicated
//! thread and feeds them, together with events raised by background tasks,
//! into the application loop.

use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use dockpanel_common::types::ContainerSummary;
use tokio::sync::{mpsc, oneshot};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for UI refresh.
    Tick,
}

/// Everything the application loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// Input from the terminal.
    Terminal(TerminalEvent),
    /// The container list should be fetched again.
    Refresh,
    /// A container list fetch finished.
    ContainersLoaded(Result<Vec<ContainerSummary>, String>),
    /// A dispatched action needs the user's approval.
    ConfirmRequested {
        /// Question to show.
        prompt: String,
        /// Where the answer goes.
        reply: oneshot::Sender<bool>,
    },
}

/// Sender half of the application event channel.
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Starts the thread that reads terminal input.
///
/// The thread emits a [`TerminalEvent::Tick`] whenever no input arrives
/// within `tick_rate` and exits once the receiver is gone.
pub fn spawn_terminal_reader(tx: EventSender, tick_rate: Duration) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            let event = match crossterm::event::poll(tick_rate) {
                Ok(true) => match crossterm::event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        TerminalEvent::Key(key)
                    }
                    Ok(Event::Resize(w, h)) => TerminalEvent::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!(error = %e, "terminal read failed");
                        return;
                    }
                },
                Ok(false) => TerminalEvent::Tick,
                Err(e) => {
                    tracing::error!(error = %e, "terminal poll failed");
                    return;
                }
            };
            if tx.send(AppEvent::Terminal(event)).is_err() {
                return;
            }
        }
    })
}
