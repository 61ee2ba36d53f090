//! Get command: fetch a URL through the retry executor and report the outcome.

use anyhow::Result;
use rget_core::config::RgetConfig;
use rget_core::http::{HttpError, HttpOptions, Response};
use rget_core::retry::RetryError;
use std::time::Duration;

/// Command-line values that take precedence over config.toml.
#[derive(Debug, Default, Clone)]
pub struct GetOverrides {
    pub url: Option<String>,
    pub attempts: Option<u32>,
    pub base_delay_secs: Option<f64>,
    pub max_delay_secs: Option<u64>,
    /// Extra headers; replace config headers with the same name.
    pub headers: Vec<(String, String)>,
}

/// Settings for one run, after merging overrides into config.
#[derive(Debug, Clone)]
pub(crate) struct GetSettings {
    pub url: String,
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Option<Duration>,
    pub http: HttpOptions,
}

pub(crate) fn resolve(cfg: &RgetConfig, overrides: GetOverrides) -> GetSettings {
    let mut backoff = cfg.backoff.clone();
    if let Some(secs) = overrides.base_delay_secs {
        backoff.base_delay_secs = secs;
    }
    if let Some(secs) = overrides.max_delay_secs {
        backoff.max_delay_secs = Some(secs);
    }
    let mut http = cfg.http.to_options();
    http.headers.extend(overrides.headers);
    GetSettings {
        url: overrides.url.unwrap_or_else(|| cfg.url.clone()),
        max_attempts: overrides.attempts.unwrap_or(cfg.max_attempts),
        base_delay: backoff.base_delay(),
        max_delay: backoff.max_delay(),
        http,
    }
}

/// Parse a `Name: value` header argument.
pub(crate) fn parse_header(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected `Name: value`, got {:?}", s)),
    }
}

/// One-line outcome printed to stdout.
pub(crate) fn report(outcome: &Result<Response, RetryError<HttpError>>) -> String {
    match outcome {
        Ok(resp) => format!(
            "Request succeeded! (HTTP {}, {} bytes)",
            resp.status,
            resp.body.len()
        ),
        Err(err) => format!("Request failed: {}", err),
    }
}

/// Run the GET with retries. A failed request is reported, not returned as
/// an error, so the process exits normally either way.
pub fn run_get(cfg: &RgetConfig, overrides: GetOverrides) -> Result<()> {
    let s = resolve(cfg, overrides);
    tracing::info!(
        url = %s.url,
        max_attempts = s.max_attempts,
        base_delay = ?s.base_delay,
        "get"
    );
    let outcome =
        rget_core::get_with_retry(&s.url, &s.http, s.max_attempts, s.base_delay, s.max_delay);
    if let Err(err) = &outcome {
        tracing::error!("request failed: {}", err);
    }
    println!("{}", report(&outcome));
    Ok(())
}
