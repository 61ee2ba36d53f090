//! Classify HTTP status and curl errors into retry kinds.

use super::error::HttpError;

/// High-level classification of a failed GET for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, etc.).
    Connection,
    /// Any other curl failure (TLS handshake, malformed reply, etc.).
    Transport,
    /// 5xx response.
    Server(u16),
    /// Non-2xx response outside the 5xx range.
    Client(u16),
    /// No request was sent (bad URL).
    Other,
}

impl ErrorKind {
    /// Every transport failure and every 5xx response is worth another attempt.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout
                | ErrorKind::Connection
                | ErrorKind::Transport
                | ErrorKind::Server(_)
        )
    }
}

/// Classify an HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    let code16 = u16::try_from(code).unwrap_or(u16::MAX);
    match code {
        500..=599 => ErrorKind::Server(code16),
        _ => ErrorKind::Client(code16),
    }
}

/// Classify a curl error. Timeouts and connection failures get their own
/// kinds; everything else curl reports is a generic transport failure.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Transport
}

pub fn classify(e: &HttpError) -> ErrorKind {
    match e {
        HttpError::Transport(ce) => classify_curl_error(ce),
        HttpError::Server(code) | HttpError::Status(code) => classify_http_status(*code),
        HttpError::InvalidUrl { .. } => ErrorKind::Other,
    }
}

/// Retry decision for [`get`](super::get) failures.
pub fn is_retryable(e: &HttpError) -> bool {
    let kind = classify(e);
    tracing::debug!(?kind, error = %e, "classified GET failure");
    kind.is_retryable()
}
