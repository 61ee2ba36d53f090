use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http::HttpOptions;

/// Backoff parameters (optional `[backoff]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Delay before the first retry in seconds; doubles on each retry.
    pub base_delay_secs: f64,
    /// Optional upper bound on a single delay in seconds.
    #[serde(default)]
    pub max_delay_secs: Option<u64>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base_delay_secs: 1.0,
            max_delay_secs: None,
        }
    }
}

impl BackoffConfig {
    /// Base delay as a Duration. Negative or non-finite values become zero.
    pub fn base_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.base_delay_secs).unwrap_or(Duration::ZERO)
    }

    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay_secs.map(Duration::from_secs)
    }
}

/// Curl timeouts (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    /// Extra request headers (`[http.headers]` table, "Name" = "value").
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            headers: HashMap::new(),
        }
    }
}

impl HttpConfig {
    pub fn to_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            headers: self.headers.clone(),
        }
    }
}

/// Global configuration loaded from `~/.config/rget/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RgetConfig {
    /// URL fetched when none is given on the command line.
    pub url: String,
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    #[serde(default)]
    pub backoff: BackoffConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for RgetConfig {
    fn default() -> Self {
        Self {
            url: "https://api.example.com/data".to_string(),
            max_attempts: 3,
            backoff: BackoffConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RgetConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<RgetConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: RgetConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` as TOML, creating parent directories.
pub fn write_to(path: &Path, cfg: &RgetConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
