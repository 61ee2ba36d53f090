//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl). One call is one attempt: it either returns
//! a 2xx [`Response`] or an [`HttpError`] that [`is_retryable`] can classify.

mod classify;
mod error;

pub use classify::{classify, classify_curl_error, classify_http_status, is_retryable, ErrorKind};
pub use error::HttpError;

use std::collections::HashMap;
use std::time::Duration;

/// Per-request curl settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Extra request headers ("Name" -> "value").
    pub headers: HashMap<String, String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            headers: HashMap::new(),
        }
    }
}

/// Successful (2xx) response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs a GET and returns the body on a 2xx status.
///
/// Follows redirects. Runs in the current thread.
pub fn get(url: &str, opts: &HttpOptions) -> Result<Response, HttpError> {
    url::Url::parse(url).map_err(|source| HttpError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let mut body = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    if !opts.headers.is_empty() {
        let mut list = curl::easy::List::new();
        for (k, v) in &opts.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");
    if !(200..300).contains(&status) {
        return Err(HttpError::from_status(status));
    }
    Ok(Response { status, body })
}
