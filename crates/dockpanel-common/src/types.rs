//! Domain primitive types used across the dockpanel workspace.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Opaque identifier of a remote container.
///
/// The format is owned by the remote API and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a new container ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A user-initiated operation on a single container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a stopped container.
    Start,
    /// Stop a running container.
    Stop,
    /// Restart a container.
    Restart,
    /// Pull the latest image and recreate the container.
    Update,
    /// Ask the server to regenerate the container's description.
    RegenerateDescription,
}

impl Action {
    /// Every action, in dashboard key-binding order.
    pub const ALL: [Self; 5] = [
        Self::Start,
        Self::Stop,
        Self::Restart,
        Self::Update,
        Self::RegenerateDescription,
    ];

    /// Final path segment of the action's endpoint.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Update => "update",
            Self::RegenerateDescription => "regenerate-description",
        }
    }

    /// Prompt the user must accept before the request is sent.
    ///
    /// `None` means the action is dispatched without asking.
    #[must_use]
    pub const fn confirmation_prompt(self) -> Option<&'static str> {
        match self {
            Self::Stop => Some("Are you sure you want to stop this container?"),
            Self::Restart => Some("Are you sure you want to restart this container?"),
            Self::Update => {
                Some("This will pull the latest image and recreate the container. Continue?")
            }
            Self::Start | Self::RegenerateDescription => None,
        }
    }

    /// Informational notice shown while a slow request is in flight.
    #[must_use]
    pub const fn pending_notice(self) -> Option<&'static str> {
        match self {
            Self::Update => Some("Updating container... This may take a minute."),
            Self::RegenerateDescription => Some("Generating AI description..."),
            Self::Start | Self::Stop | Self::Restart => None,
        }
    }

    /// Prefix of the error shown when the request itself fails.
    #[must_use]
    pub const fn failure_prefix(self) -> &'static str {
        match self {
            Self::Start => "Error starting container: ",
            Self::Stop => "Error stopping container: ",
            Self::Restart => "Error restarting container: ",
            Self::Update => "Error updating container: ",
            Self::RegenerateDescription => "Error regenerating description: ",
        }
    }

    /// Delay between a successful response and the follow-up refresh.
    #[must_use]
    pub const fn refresh_delay(self) -> Duration {
        match self {
            Self::Start | Self::Stop | Self::RegenerateDescription => {
                Duration::from_millis(constants::SHORT_REFRESH_DELAY_MS)
            }
            Self::Restart | Self::Update => Duration::from_millis(constants::LONG_REFRESH_DELAY_MS),
        }
    }

    /// Text shown in the success notification for this action's result.
    #[must_use]
    pub fn success_message(self, result: &ActionResult) -> String {
        match self {
            Self::RegenerateDescription => format!(
                "{}{}",
                constants::DESCRIPTION_PREFIX,
                result.description.as_deref().unwrap_or_default()
            ),
            _ => result.message.clone(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Uniform response body of every action endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// `"success"` or any other value signalling failure.
    pub status: String,
    /// Human-readable outcome supplied by the server.
    #[serde(default)]
    pub message: String,
    /// Regenerated description, only present for that action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short id of the recreated container, only present after an update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_id: Option<String>,
}

impl ActionResult {
    /// Returns `true` when the status is exactly `"success"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == constants::SUCCESS_STATUS
    }
}

/// Visual class of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral progress or status text.
    #[default]
    Info,
    /// The action completed.
    Success,
    /// The action failed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Contents of the single notification slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Visual class.
    pub severity: Severity,
    /// Whether the notification is currently shown.
    pub visible: bool,
}

impl Notification {
    /// Creates a visible notification.
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            visible: true,
        }
    }
}

/// One host port binding of a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    /// Container-side port and protocol, e.g. `80/tcp`.
    pub container_port: String,
    /// Host port the container port is published on.
    pub host_port: String,
    /// Host interface the binding listens on.
    #[serde(default = "default_host_ip")]
    pub host_ip: String,
}

fn default_host_ip() -> String {
    "0.0.0.0".to_string()
}

/// A container as reported by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    /// Short container id.
    pub id: ContainerId,
    /// Container name.
    pub name: String,
    /// First image tag, or `unknown`.
    pub image: String,
    /// Runtime status, e.g. `running` or `exited`.
    pub status: String,
    /// Human-readable description of what the container does.
    #[serde(default)]
    pub description: String,
    /// Primary URL derived from the published ports.
    #[serde(default)]
    pub url: Option<String>,
    /// All published port bindings.
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    /// Lifecycle state as reported by the server.
    #[serde(default)]
    pub state: String,
}

impl ContainerSummary {
    /// Returns `true` when the container reports itself as running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}
