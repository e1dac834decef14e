//! Unified error types for the dockpanel workspace.
//!
//! [`ClientError`] covers everything that can go wrong while talking to the
//! remote API. [`DispatchError`] is what an action reports back to the user:
//! either the server refused the action, or the call never produced a usable
//! answer.

use thiserror::Error;

/// Failure while talking to the container-management API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("{message}")]
    Http {
        /// Description of the transport failure.
        message: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("invalid response body: {source}")]
    Decode {
        /// Underlying deserialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The API answered with an explicit error payload.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error text supplied by the server.
        message: String,
    },

    /// The configured base URL could not be used to build a request URL.
    #[error("invalid API url {url}: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
}

/// Why a dispatched action did not succeed.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The server responded but reported a status other than `success`.
    #[error("{message}")]
    Application {
        /// Message taken verbatim from the response.
        message: String,
    },

    /// The request failed or its body could not be parsed.
    #[error("{prefix}{source}")]
    Transport {
        /// Fixed, action-specific prefix.
        prefix: &'static str,
        /// Underlying client failure.
        source: ClientError,
    },
}

impl DispatchError {
    /// Returns the text shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Convenience alias used by the client layer.
pub type Result<T> = std::result::Result<T, ClientError>;
