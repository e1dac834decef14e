//! Transport abstraction over the container-management API.

use std::future::Future;
use std::sync::Arc;

use dockpanel_common::error::Result;
use dockpanel_common::types::{Action, ActionResult, ContainerId, ContainerSummary};

/// Remote API the dashboard drives.
///
/// Implementors handle the wire details. Callers only see the uniform
/// [`ActionResult`] body, whatever HTTP status carried it.
pub trait ContainerApi: Send + Sync {
    /// Sends `POST /api/container/{id}/{action}` and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an
    /// [`ActionResult`]. A non-success `status` in a well-formed body is
    /// not an error at this layer.
    fn post_action(
        &self,
        id: &ContainerId,
        action: Action,
    ) -> impl Future<Output = Result<ActionResult>> + Send;

    /// Fetches the container list from `GET /api/containers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with an
    /// error payload, or the body cannot be decoded.
    fn list_containers(&self) -> impl Future<Output = Result<Vec<ContainerSummary>>> + Send;
}

impl<T: ContainerApi> ContainerApi for Arc<T> {
    fn post_action(
        &self,
        id: &ContainerId,
        action: Action,
    ) -> impl Future<Output = Result<ActionResult>> + Send {
        (**self).post_action(id, action)
    }

    fn list_containers(&self) -> impl Future<Output = Result<Vec<ContainerSummary>>> + Send {
        (**self).list_containers()
    }
}
