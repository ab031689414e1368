//! Scheduler seam for the timed language transition.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller for a transition delay.
///
/// The controller never calls `tokio::time` directly, so tests can swap in
/// any clock. With the default [`TokioTimer`], tests can also run on tokio's
/// paused clock and advance virtual time deterministically.
#[async_trait]
pub trait TransitionTimer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl TransitionTimer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_follows_virtual_clock() {
        let start = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(500)).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
