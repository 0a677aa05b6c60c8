//! Timing seam for the animation player
//!
//! The player never calls `tokio::time::sleep` directly. Production code
//! uses [`TokioClock`]; tests and `--delay-ms 0` runs use [`InstantClock`],
//! which resolves immediately and counts how often it was asked to wait.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Source of the per-step pause
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real wall-clock delays on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Resolves every sleep immediately
#[derive(Debug, Default)]
pub struct InstantClock {
    sleeps: AtomicUsize,
    total: AtomicUsize,
}

impl InstantClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the player paused
    #[cfg(test)]
    pub fn sleeps(&self) -> usize {
        self.sleeps.load(Ordering::SeqCst)
    }

    /// Sum of all requested pauses
    #[cfg(test)]
    pub fn total_requested(&self) -> Duration {
        Duration::from_millis(self.total.load(Ordering::SeqCst) as u64)
    }
}

impl Clock for InstantClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.total
            .fetch_add(duration.as_millis() as usize, Ordering::SeqCst);
        std::future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn instant_clock_counts_requests() {
        let clock = InstantClock::new();
        clock.sleep(Duration::from_millis(1000)).await;
        clock.sleep(Duration::from_millis(250)).await;
        assert_eq!(clock.sleeps(), 2);
        assert_eq!(clock.total_requested(), Duration::from_millis(1250));
    }

    #[tokio::test]
    async fn tokio_clock_waits() {
        let start = std::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
