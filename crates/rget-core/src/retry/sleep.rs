//! Waiting between attempts.
//!
//! The executor never calls `std::thread::sleep` directly; it goes through a
//! [`Sleeper`] so the wait can be swapped for one that can be cut short
//! (see [`AbortableSleeper`]) or, in tests, one that only records delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Returned by a [`Sleeper`] when the wait ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wait interrupted")]
pub struct Interrupted;

/// Blocks the calling thread for a backoff delay.
pub trait Sleeper {
    /// Wait for `delay`. Returns `Err(Interrupted)` if the wait was cut short
    /// and the retry loop should stop.
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted>;
}

/// Unconditional blocking sleep on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(())
    }
}

/// Shared flag used to stop a retry loop from another thread.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abort. Any wait in progress ends within one poll interval.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Blocking sleep that wakes up periodically to check an [`AbortToken`].
#[derive(Debug, Clone)]
pub struct AbortableSleeper {
    token: AbortToken,
    poll_interval: Duration,
}

impl AbortableSleeper {
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

    pub fn new(token: AbortToken) -> Self {
        Self {
            token,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval.max(Duration::from_millis(1));
        self
    }
}

impl Sleeper for AbortableSleeper {
    fn sleep(&mut self, delay: Duration) -> Result<(), Interrupted> {
        let deadline = Instant::now() + delay;
        loop {
            if self.token.is_aborted() {
                return Err(Interrupted);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep((deadline - now).min(self.poll_interval));
        }
    }
}
