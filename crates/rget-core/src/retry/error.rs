//! Terminal outcome of a retry loop.

use thiserror::Error;

/// Why the retry loop gave up. Every variant except `NoAttempts` carries the
/// error returned by the last attempt, so callers can still match on the cause.
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// The decision function classified the error as terminal.
    #[error("non-retryable error after {attempts} attempt(s): {source}")]
    Rejected {
        attempts: u32,
        #[source]
        source: E,
    },
    /// Every permitted attempt failed with a retryable error.
    #[error("failed after {attempts} attempt(s): {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: E,
    },
    /// The wait before the next attempt was interrupted.
    #[error("aborted after {attempts} attempt(s): {source}")]
    Aborted {
        attempts: u32,
        #[source]
        source: E,
    },
    /// The attempt budget was zero, so the operation never ran.
    #[error("no attempts made (max attempts is 0)")]
    NoAttempts,
}

impl<E> RetryError<E> {
    /// Number of times the operation was invoked.
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Rejected { attempts, .. }
            | RetryError::Exhausted { attempts, .. }
            | RetryError::Aborted { attempts, .. } => *attempts,
            RetryError::NoAttempts => 0,
        }
    }

    /// Error from the last attempt, if any attempt was made.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            RetryError::Rejected { source, .. }
            | RetryError::Exhausted { source, .. }
            | RetryError::Aborted { source, .. } => Some(source),
            RetryError::NoAttempts => None,
        }
    }

    pub fn into_last_error(self) -> Option<E> {
        match self {
            RetryError::Rejected { source, .. }
            | RetryError::Exhausted { source, .. }
            | RetryError::Aborted { source, .. } => Some(source),
            RetryError::NoAttempts => None,
        }
    }

    /// True when the loop stopped because every attempt was used up.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RetryError::Exhausted { .. } | RetryError::NoAttempts)
    }
}
