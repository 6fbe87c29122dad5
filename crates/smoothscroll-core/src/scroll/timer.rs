//! L4 Atomic Layer: Deferred-delay primitive driving the tick loop

use std::time::Duration;

use async_trait::async_trait;

/// Monotonic clock plus an awaitable delay
///
/// Futures are not required to be `Send`: animations run cooperatively on a
/// single event loop.
#[async_trait(?Send)]
pub trait Timer {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> f64;

    /// Suspend the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Timer backed by `tokio::time`
///
/// Honors paused time in tests (`#[tokio::test(start_paused = true)]`).
#[derive(Debug, Clone, Copy)]
pub struct TokioTimer {
    origin: tokio::time::Instant,
}

impl TokioTimer {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Timer for TokioTimer {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
