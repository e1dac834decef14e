//! Dashboard event loop.

use std::sync::Arc;
use std::time::Duration;

use dockpanel_client::{ContainerApi, HttpApi};
use dockpanel_common::config::PanelConfig;
use dockpanel_common::error::ClientError;
use dockpanel_common::types::Severity;
use dockpanel_core::{Confirm, Dispatcher, Notifier, Refresh, RefreshLoop};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::app::{App, Command};
use crate::bridge::{ChannelConfirm, ChannelRefresh};
use crate::event::{AppEvent, EventSender, TerminalEvent, spawn_terminal_reader};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Errors that end the dashboard.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The terminal could not be set up or drawn to.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The API client could not be built.
    #[error(transparent)]
    Client(#[from] ClientError),
}

type PanelDispatcher = Dispatcher<HttpApi, ChannelConfirm, ChannelRefresh>;

/// Restores the terminal however the loop exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the API client cannot be built or the terminal
/// cannot be initialised or drawn to.
pub async fn run(config: PanelConfig) -> Result<(), TuiError> {
    let api = HttpApi::new(&config)?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let notifier = Arc::new(Notifier::with_ttl(config.notification_ttl()));
    let refresh = Arc::new(ChannelRefresh::new(tx.clone()));
    let dispatcher: Arc<PanelDispatcher> = Arc::new(Dispatcher::new(
        api,
        ChannelConfirm::new(tx.clone()),
        Arc::clone(&refresh),
        Arc::clone(&notifier),
    ));
    let _refresh_loop = RefreshLoop::start(config.refresh_interval(), Arc::clone(&refresh));
    let mut notifications = notifier.subscribe();

    let mut terminal = ratatui::try_init()?;
    let _guard = TerminalGuard;
    let _reader = spawn_terminal_reader(tx.clone(), TICK_RATE);

    tracing::info!(base_url = %config.base_url, "dashboard started");
    refresh.refresh();

    let mut app = App::new();
    while app.running {
        let _ = terminal.draw(|frame| crate::ui::render(frame, &app))?;

        tokio::select! {
            event = rx.recv() => match event {
                Some(event) => handle_event(&mut app, event, &dispatcher, &tx),
                None => break,
            },
            changed = notifications.changed() => {
                if changed.is_ok() {
                    app.notification = notifier.current();
                }
            }
        }
    }

    dispatcher.cancel_pending();
    tracing::info!("dashboard closed");
    Ok(())
}

/// Applies one event to the app, spawning any API work it needs.
///
/// Results of that work come back through `tx` as further events.
fn handle_event<A, C, R>(
    app: &mut App,
    event: AppEvent,
    dispatcher: &Arc<Dispatcher<A, C, R>>,
    tx: &EventSender,
) where
    A: ContainerApi + 'static,
    C: Confirm + 'static,
    R: Refresh,
{
    match event {
        AppEvent::Terminal(TerminalEvent::Key(key)) => match app.handle_key(key) {
            Command::Dispatch(action, id) => {
                let dispatcher = Arc::clone(dispatcher);
                drop(tokio::spawn(async move {
                    let _ = dispatcher.dispatch(action, &id).await;
                }));
            }
            Command::Refresh => {
                let _ = tx.send(AppEvent::Refresh);
            }
            Command::Quit | Command::None => {}
        },
        AppEvent::Terminal(TerminalEvent::Tick | TerminalEvent::Resize(..)) => {
            app.notification = dispatcher.notifier().current();
        }
        AppEvent::Refresh => {
            let dispatcher = Arc::clone(dispatcher);
            let tx = tx.clone();
            drop(tokio::spawn(async move {
                let loaded = dispatcher
                    .api()
                    .list_containers()
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(AppEvent::ContainersLoaded(loaded));
            }));
        }
        AppEvent::ContainersLoaded(Ok(containers)) => {
            tracing::debug!(count = containers.len(), "containers refreshed");
            app.set_containers(containers);
        }
        AppEvent::ContainersLoaded(Err(message)) => {
            tracing::warn!(error = %message, "container refresh failed");
            dispatcher
                .notifier()
                .show(format!("Error loading containers: {message}"), Severity::Error);
        }
        AppEvent::ConfirmRequested { prompt, reply } => app.ask(prompt, reply),
    }
}
