//! Capabilities the front-end injects into the dispatcher.

use std::future::Future;
use std::sync::Arc;

/// Asks the user to approve a destructive action.
pub trait Confirm: Send + Sync {
    /// Shows `prompt` and resolves to `true` if the user accepted.
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// Re-fetches and re-renders whatever shows container state.
pub trait Refresh: Send + Sync + 'static {
    /// Triggers a refresh. Must not block.
    fn refresh(&self);
}

/// Accepts every prompt without asking. Backs `--yes` on the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, "confirmation assumed");
        true
    }
}

impl<T: Confirm> Confirm for Arc<T> {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send {
        (**self).confirm(prompt)
    }
}
