//! Retry executor.
//!
//! A caller supplies four independent pieces: the operation, a predicate
//! deciding which errors are worth retrying, an attempt budget and a backoff
//! function. [`execute`] composes them into one blocking loop and always
//! surfaces the last real error together with the attempt count.

mod backoff;
mod error;
mod run;
mod sleep;

pub use backoff::{constant, exponential, exponential_capped};
pub use error::RetryError;
pub use run::{execute, RetryExecutor};
pub use sleep::{AbortToken, AbortableSleeper, Interrupted, Sleeper, ThreadSleeper};
