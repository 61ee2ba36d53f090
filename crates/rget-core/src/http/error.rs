//! Error type for a single GET attempt.

use thiserror::Error;

/// Failure of one GET request. Kept separate from `anyhow` so the retry
/// decision can inspect it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The URL did not parse; no request was sent.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported a connection-level failure (timeout, refused, DNS, etc.).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// Server answered with a 5xx status.
    #[error("server error: HTTP {0}")]
    Server(u32),
    /// Any other non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
}

impl HttpError {
    /// Map a non-2xx response status to the matching variant.
    pub fn from_status(code: u32) -> Self {
        if (500..=599).contains(&code) {
            HttpError::Server(code)
        } else {
            HttpError::Status(code)
        }
    }

    /// Response status, if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            HttpError::Server(code) | HttpError::Status(code) => Some(*code),
            HttpError::InvalidUrl { .. } | HttpError::Transport(_) => None,
        }
    }
}
