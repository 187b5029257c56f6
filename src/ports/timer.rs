//! Timer port for delayed UI updates.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`Timer::sleep`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Suspends for a fixed duration.
///
/// Abstracting the delay lets tests observe the requested duration without
/// waiting for it.
pub trait Timer: Send + Sync {
    /// Completes after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> TimerFuture<'_>;
}
