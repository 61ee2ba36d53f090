//! Backoff functions: map a zero-based attempt index to a delay.
//!
//! These are plain closures so they can be handed straight to
//! [`execute`](super::execute) without any policy object.

use std::time::Duration;

/// Largest shift applied to the base delay. Keeps `base * 2^i` from
/// overflowing long before any realistic attempt budget is reached.
const MAX_SHIFT: u32 = 20;

/// Exponential backoff: `base * 2^attempt`.
///
/// With a base of one second this yields 1s, 2s, 4s, ... for attempts 0, 1, 2.
pub fn exponential(base: Duration) -> impl Fn(u32) -> Duration + Copy {
    move |attempt| base.saturating_mul(1u32 << attempt.min(MAX_SHIFT))
}

/// Exponential backoff capped at `max_delay`.
pub fn exponential_capped(base: Duration, max_delay: Duration) -> impl Fn(u32) -> Duration + Copy {
    let raw = exponential(base);
    move |attempt| raw(attempt).min(max_delay)
}

/// Same delay before every retry.
pub fn constant(delay: Duration) -> impl Fn(u32) -> Duration + Copy {
    move |_| delay
}
