//! Global configuration model for dockpanel clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Root configuration shared by the CLI and the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Base URL of the container-management API.
    pub base_url: String,
    /// Optional per-request timeout. `None` leaves it to the transport.
    pub request_timeout_secs: Option<u64>,
    /// Period of the passive refresh loop in milliseconds.
    pub refresh_interval_ms: u64,
    /// How long a notification stays visible in milliseconds.
    pub notification_ttl_ms: u64,
}

impl PanelConfig {
    /// Creates a configuration pointing at the given API base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns the passive refresh period.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Returns the notification lifetime.
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            refresh_interval_ms: constants::REFRESH_INTERVAL_MS,
            notification_ttl_ms: constants::NOTIFICATION_TTL_MS,
        }
    }
}
