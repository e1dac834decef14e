//! Cancellable delayed tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// A set of delayed callbacks owned by one component.
///
/// Pending callbacks are aborted when the set is dropped.
#[derive(Debug, Default)]
pub struct TaskSet {
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskSet {
    /// Creates an empty task set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` once after `delay`.
    pub fn spawn_after<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        let mut tasks = self.lock();
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle);
    }

    /// Number of callbacks that have not yet run.
    pub fn pending(&self) -> usize {
        self.lock().iter().filter(|t| !t.is_finished()).count()
    }

    /// Aborts every pending callback.
    pub fn cancel_all(&self) {
        for task in self.lock().drain(..) {
            task.abort();
        }
    }

    /// Waits until every callback scheduled so far has run.
    pub async fn settle(&self) {
        let tasks = std::mem::take(&mut *self.lock());
        for task in tasks {
            // An aborted task resolves to a cancellation error; nothing to report.
            let _ = task.await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
