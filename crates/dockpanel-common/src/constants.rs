//! System-wide constants: endpoints, timings, and user-facing text.

/// Default base URL of the container-management API.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "DOCKPANEL_URL";

/// Environment variable setting an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "DOCKPANEL_TIMEOUT_SECS";

/// Path prefix for per-container action endpoints.
pub const CONTAINER_API_PREFIX: &str = "/api/container";

/// Path of the container listing endpoint.
pub const CONTAINERS_API_PATH: &str = "/api/containers";

/// Status value the API returns for a successful action.
pub const SUCCESS_STATUS: &str = "success";

/// How long a notification stays visible before it is hidden.
pub const NOTIFICATION_TTL_MS: u64 = 5_000;

/// Period of the passive refresh loop.
pub const REFRESH_INTERVAL_MS: u64 = 30_000;

/// Refresh delay after a successful start, stop, or description regeneration.
pub const SHORT_REFRESH_DELAY_MS: u64 = 1_000;

/// Refresh delay after a successful restart or update.
pub const LONG_REFRESH_DELAY_MS: u64 = 2_000;

/// Prefix placed before a regenerated description in the success notification.
pub const DESCRIPTION_PREFIX: &str = "Description: ";

/// Application name used in CLI output and the user agent.
pub const APP_NAME: &str = "dockpanel";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dpanel";

/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!("dockpanel/", env!("CARGO_PKG_VERSION"));
