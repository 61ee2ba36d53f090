//! Integration test: retrying GET against a local server with scripted statuses.

mod common;

use common::status_server;
use rget_core::http::{self, ErrorKind, HttpError, HttpOptions};
use rget_core::retry::{self, RetryError};
use std::time::Duration;

fn fast_options() -> HttpOptions {
    HttpOptions {
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
        ..HttpOptions::default()
    }
}

#[test]
fn get_returns_body_on_200() {
    let server = status_server::start(vec![200], b"hello");
    let resp = http::get(&server.url, &fast_options()).expect("GET");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"hello");
}

#[test]
fn configured_headers_are_sent() {
    let server = status_server::start(vec![200], b"");
    let mut opts = fast_options();
    opts.headers
        .insert("X-Request-Tag".to_string(), "  rget-test ".to_string());
    http::get(&server.url, &opts).expect("GET");
    let headers = server.last_request_headers();
    assert!(
        headers.iter().any(|h| h == "X-Request-Tag: rget-test"),
        "header not received: {:?}",
        headers
    );
}

#[test]
fn server_error_then_success_retries() {
    let server = status_server::start(vec![503, 500, 200], b"ok");
    let resp = rget_core::get_with_retry(&server.url, &fast_options(), 5, Duration::ZERO, None)
        .expect("should succeed on third attempt");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"ok");
    assert_eq!(server.hits(), 3);
}

#[test]
fn client_error_is_not_retried() {
    let server = status_server::start(vec![404], b"");
    let err = rget_core::get_with_retry(&server.url, &fast_options(), 5, Duration::ZERO, None)
        .unwrap_err();
    assert_eq!(server.hits(), 1);
    match err {
        RetryError::Rejected { attempts, source } => {
            assert_eq!(attempts, 1);
            assert!(matches!(source, HttpError::Status(404)));
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[test]
fn persistent_server_error_exhausts_budget() {
    let server = status_server::start(vec![502], b"");
    let err = rget_core::get_with_retry(&server.url, &fast_options(), 3, Duration::ZERO, None)
        .unwrap_err();
    assert_eq!(server.hits(), 3);
    assert!(err.is_exhausted());
    assert_eq!(err.attempts(), 3);
    assert!(matches!(err.last_error(), Some(HttpError::Server(502))));
    assert_eq!(err.to_string(), "failed after 3 attempt(s): server error: HTTP 502");
}

#[test]
fn refused_connection_is_transport_error_and_retried() {
    let url = status_server::refused_url();
    let err = retry::execute(
        || http::get(&url, &fast_options()),
        http::is_retryable,
        2,
        retry::constant(Duration::ZERO),
    )
    .unwrap_err();
    assert!(matches!(err, RetryError::Exhausted { attempts: 2, .. }));
    let last = err.last_error().expect("last error");
    assert!(matches!(last, HttpError::Transport(_)));
    assert_eq!(http::classify(last), ErrorKind::Connection);
}

#[test]
fn invalid_url_fails_without_request() {
    let err = rget_core::get_with_retry("not a url", &fast_options(), 3, Duration::ZERO, None)
        .unwrap_err();
    assert!(matches!(
        err,
        RetryError::Rejected {
            attempts: 1,
            source: HttpError::InvalidUrl { .. }
        }
    ));
}
