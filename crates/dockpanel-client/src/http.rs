//! `reqwest`-backed implementation of [`ContainerApi`].

use std::error::Error as _;

use dockpanel_common::config::PanelConfig;
use dockpanel_common::constants::{CONTAINERS_API_PATH, CONTAINER_API_PREFIX, USER_AGENT};
use dockpanel_common::error::{ClientError, Result};
use dockpanel_common::types::{Action, ActionResult, ContainerId, ContainerSummary};
use serde::Deserialize;

use crate::api::ContainerApi;

/// Error payload returned by the listing endpoint on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the container-management API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Builds a client from the panel configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base URL is not an absolute
    /// http(s) URL, or `ClientError::Http` if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &PanelConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: config.base_url.clone(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(http_error)?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the endpoint for an action on a container.
    #[must_use]
    pub fn action_url(&self, id: &ContainerId, action: Action) -> String {
        format!(
            "{}{CONTAINER_API_PREFIX}/{id}/{}",
            self.base_url,
            action.path_segment()
        )
    }

    /// Returns the container listing endpoint.
    #[must_use]
    pub fn containers_url(&self) -> String {
        format!("{}{CONTAINERS_API_PATH}", self.base_url)
    }
}

impl ContainerApi for HttpApi {
    async fn post_action(&self, id: &ContainerId, action: Action) -> Result<ActionResult> {
        let url = self.action_url(id, action);
        tracing::debug!(%url, "posting container action");

        let response = self.client.post(&url).send().await.map_err(http_error)?;
        let status = response.status();
        let body = response.text().await.map_err(http_error)?;
        tracing::debug!(%url, status = status.as_u16(), "action response received");

        // Failed actions come back as 4xx/5xx with the same body shape.
        let result: ActionResult = serde_json::from_str(&body)?;
        Ok(result)
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        let url = self.containers_url();
        let response = self.client.get(&url).send().await.map_err(http_error)?;
        let status = response.status();
        let body = response.text().await.map_err(http_error)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let containers: Vec<ContainerSummary> = serde_json::from_str(&body)?;
        tracing::debug!(count = containers.len(), "container list fetched");
        Ok(containers)
    }
}

/// Flattens a `reqwest` error and its causes into a single message.
fn http_error(err: reqwest::Error) -> ClientError {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    ClientError::Http { message }
}
