//! Live timer backed by the tokio runtime.

use std::time::Duration;

use crate::ports::{Timer, TimerFuture};

/// Sleeps on the tokio timer.
pub struct LiveTimer;

impl Timer for LiveTimer {
    fn sleep(&self, duration: Duration) -> TimerFuture<'_> {
        Box::pin(tokio::time::sleep(duration))
    }
}
