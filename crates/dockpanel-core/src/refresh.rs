//! Passive refresh loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::capability::Refresh;

/// Calls [`Refresh::refresh`] on a fixed period until stopped or dropped.
///
/// The first refresh happens one full period after start. There is no
/// backoff and no jitter.
#[derive(Debug)]
pub struct RefreshLoop {
    handle: JoinHandle<()>,
}

impl RefreshLoop {
    /// Spawns the loop. A zero period is raised to one millisecond.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<R: Refresh>(period: Duration, refresh: Arc<R>) -> Self {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let _ = ticker.tick().await;
                tracing::debug!(period_ms = period.as_millis(), "passive refresh");
                refresh.refresh();
            }
        });
        Self { handle }
    }

    /// Returns `true` while the loop task is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the loop.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RefreshLoop {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl Refresh for Counter {
        fn refresh(&self) {
            let _ = self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_every_period() {
        let counter = Arc::new(Counter::default());
        let refresh_loop = RefreshLoop::start(Duration::from_secs(30), Arc::clone(&counter));

        tokio::time::sleep(Duration::from_millis(29_999)).await;
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(60_002)).await;
        assert_eq!(counter.0.load(Ordering::SeqCst), 3);
        assert!(refresh_loop.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let counter = Arc::new(Counter::default());
        let refresh_loop = RefreshLoop::start(Duration::from_secs(30), Arc::clone(&counter));

        tokio::time::sleep(Duration::from_millis(30_001)).await;
        refresh_loop.stop();
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }
}
