//! Retry loop: run a closure until success, a terminal error, or the attempt
//! budget runs out.

use std::time::Duration;

use super::error::RetryError;
use super::sleep::{Sleeper, ThreadSleeper};

/// Runs `op` up to `max_attempts` times on the calling thread, blocking for
/// `backoff(i)` after the `i`-th retryable failure.
///
/// `retryable` is only called with errors; `backoff` is never called after
/// the last attempt. See [`RetryExecutor`] to supply a different wait.
pub fn execute<T, E, F, R, B>(
    op: F,
    retryable: R,
    max_attempts: u32,
    backoff: B,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Result<T, E>,
    R: Fn(&E) -> bool,
    B: Fn(u32) -> Duration,
{
    RetryExecutor::new().execute(op, retryable, max_attempts, backoff)
}

/// Retry loop bound to a particular [`Sleeper`].
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor<S = ThreadSleeper> {
    sleeper: S,
}

impl RetryExecutor<ThreadSleeper> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Sleeper> RetryExecutor<S> {
    pub fn with_sleeper(sleeper: S) -> Self {
        Self { sleeper }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    pub fn into_sleeper(self) -> S {
        self.sleeper
    }

    /// Same contract as [`execute`], waiting through this executor's sleeper.
    /// If the sleeper is interrupted the loop stops with [`RetryError::Aborted`].
    pub fn execute<T, E, F, R, B>(
        &mut self,
        mut op: F,
        retryable: R,
        max_attempts: u32,
        backoff: B,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Result<T, E>,
        R: Fn(&E) -> bool,
        B: Fn(u32) -> Duration,
    {
        if max_attempts == 0 {
            tracing::warn!("retry budget is zero; operation not attempted");
            return Err(RetryError::NoAttempts);
        }

        let mut attempt = 0u32;
        loop {
            let err = match op() {
                Ok(value) => {
                    if attempt > 0 {
                        tracing::debug!(attempts = attempt + 1, "operation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) => e,
            };
            let attempts = attempt + 1;
            tracing::debug!(attempt = attempts, max_attempts, "attempt failed");

            if !retryable(&err) {
                tracing::warn!(attempts, "error is not retryable; giving up");
                return Err(RetryError::Rejected {
                    attempts,
                    source: err,
                });
            }
            if attempts >= max_attempts {
                tracing::warn!(attempts, "retry attempts exhausted");
                return Err(RetryError::Exhausted {
                    attempts,
                    source: err,
                });
            }

            let delay = backoff(attempt);
            tracing::warn!(attempt = attempts, ?delay, "retryable failure; backing off");
            if self.sleeper.sleep(delay).is_err() {
                tracing::info!(attempts, "backoff wait interrupted; stopping");
                return Err(RetryError::Aborted {
                    attempts,
                    source: err,
                });
            }
            attempt = attempts;
        }
    }
}
