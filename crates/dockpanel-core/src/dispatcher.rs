//! Turns user actions into API calls and reflects their outcome.
//!
//! Every action follows the same contract:
//! 1. Ask for confirmation if the action is destructive. Declining stops
//!    here with no request and no visible change.
//! 2. Show the action's progress notice, if it has one.
//! 3. Send exactly one request. No retries.
//! 4. On `status == "success"`, show a success notification and schedule one
//!    refresh after the action's delay. Otherwise show an error notification
//!    and schedule nothing.

use std::sync::Arc;

use dockpanel_client::ContainerApi;
use dockpanel_common::error::DispatchError;
use dockpanel_common::types::{Action, ContainerId, Severity};

use crate::capability::{Confirm, Refresh};
use crate::notify::Notifier;
use crate::schedule::TaskSet;

/// Result of one dispatched action.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The user declined the confirmation prompt.
    Declined,
    /// The server reported success.
    Succeeded {
        /// Text shown in the success notification.
        message: String,
        /// ID of the replacement container, when the action recreated it.
        new_id: Option<ContainerId>,
    },
    /// The server refused the action or the request failed.
    Failed(DispatchError),
}

impl ActionOutcome {
    /// Returns `true` if the action reached the server and succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Dispatches container actions against the remote API.
#[derive(Debug)]
pub struct Dispatcher<A, C, R> {
    api: A,
    confirm: C,
    refresh: Arc<R>,
    notifier: Arc<Notifier>,
    scheduled: TaskSet,
}

impl<A, C, R> Dispatcher<A, C, R>
where
    A: ContainerApi,
    C: Confirm,
    R: Refresh,
{
    /// Creates a dispatcher from its injected collaborators.
    pub fn new(api: A, confirm: C, refresh: Arc<R>, notifier: Arc<Notifier>) -> Self {
        Self {
            api,
            confirm,
            refresh,
            notifier,
            scheduled: TaskSet::new(),
        }
    }

    /// Returns the API the dispatcher talks to.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Returns the notification surface outcomes are shown on.
    pub const fn notifier(&self) -> &Arc<Notifier> {
        &self.notifier
    }

    /// Starts a container.
    pub async fn start(&self, id: &ContainerId) -> ActionOutcome {
        self.dispatch(Action::Start, id).await
    }

    /// Stops a container after confirmation.
    pub async fn stop(&self, id: &ContainerId) -> ActionOutcome {
        self.dispatch(Action::Stop, id).await
    }

    /// Restarts a container after confirmation.
    pub async fn restart(&self, id: &ContainerId) -> ActionOutcome {
        self.dispatch(Action::Restart, id).await
    }

    /// Pulls the latest image and recreates a container after confirmation.
    pub async fn update(&self, id: &ContainerId) -> ActionOutcome {
        self.dispatch(Action::Update, id).await
    }

    /// Asks the server to regenerate a container's description.
    pub async fn regenerate_description(&self, id: &ContainerId) -> ActionOutcome {
        self.dispatch(Action::RegenerateDescription, id).await
    }

    /// Runs `action` against the container `id`.
    pub async fn dispatch(&self, action: Action, id: &ContainerId) -> ActionOutcome {
        if let Some(prompt) = action.confirmation_prompt() {
            if !self.confirm.confirm(prompt).await {
                tracing::debug!(%id, %action, "action declined");
                return ActionOutcome::Declined;
            }
        }

        if let Some(notice) = action.pending_notice() {
            self.notifier.show(notice, Severity::Info);
        }

        tracing::info!(%id, %action, "dispatching container action");
        match self.api.post_action(id, action).await {
            Ok(result) if result.is_success() => {
                let message = action.success_message(&result);
                tracing::info!(%id, %action, message = %message, "container action succeeded");
                self.notifier.show(message.clone(), Severity::Success);
                self.schedule_refresh(action);
                ActionOutcome::Succeeded {
                    message,
                    new_id: result.new_id.map(ContainerId::new),
                }
            }
            Ok(result) => {
                tracing::warn!(
                    %id,
                    %action,
                    status = %result.status,
                    message = %result.message,
                    "container action rejected"
                );
                self.notifier.show(result.message.clone(), Severity::Error);
                ActionOutcome::Failed(DispatchError::Application {
                    message: result.message,
                })
            }
            Err(source) => {
                let err = DispatchError::Transport {
                    prefix: action.failure_prefix(),
                    source,
                };
                tracing::warn!(%id, %action, error = %err, "container action request failed");
                self.notifier.show(err.user_message(), Severity::Error);
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Number of delayed refreshes that have not fired yet.
    pub fn pending_refreshes(&self) -> usize {
        self.scheduled.pending()
    }

    /// Waits for every delayed refresh scheduled so far to fire.
    pub async fn settle(&self) {
        self.scheduled.settle().await;
    }

    /// Drops every delayed refresh that has not fired yet.
    pub fn cancel_pending(&self) {
        self.scheduled.cancel_all();
    }

    fn schedule_refresh(&self, action: Action) {
        let delay = action.refresh_delay();
        let refresh = Arc::clone(&self.refresh);
        tracing::debug!(%action, delay_ms = delay.as_millis(), "refresh scheduled");
        self.scheduled.spawn_after(delay, move || refresh.refresh());
    }
}
