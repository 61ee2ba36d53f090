pub mod config;
pub mod logging;

pub mod http;
pub mod retry;

use http::{HttpError, HttpOptions, Response};
use retry::RetryError;
use std::time::Duration;

/// Fetch `url`, retrying transport failures and 5xx responses with
/// exponential backoff (`base_delay * 2^i`, optionally capped).
pub fn get_with_retry(
    url: &str,
    opts: &HttpOptions,
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Option<Duration>,
) -> Result<Response, RetryError<HttpError>> {
    let backoff = retry::exponential_capped(base_delay, max_delay.unwrap_or(Duration::MAX));
    retry::execute(|| http::get(url, opts), http::is_retryable, max_attempts, backoff)
}
