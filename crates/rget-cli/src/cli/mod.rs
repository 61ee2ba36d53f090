//! CLI for rget.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rget_core::config::{self, RgetConfig};
use std::path::PathBuf;

use commands::{parse_header, run_config, run_get, GetOverrides};

/// Top-level CLI for rget.
#[derive(Debug, Parser)]
#[command(name = "rget")]
#[command(about = "rget: HTTP GET with retries and exponential backoff", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/rget/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a URL, retrying transport failures and 5xx responses.
    Get {
        /// HTTP/HTTPS URL to fetch (defaults to the configured URL).
        url: Option<String>,
        /// Maximum number of attempts, including the first.
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,
        /// Delay before the first retry in seconds; doubles on each retry.
        #[arg(long, value_name = "SECS")]
        base_delay: Option<f64>,
        /// Upper bound on a single backoff delay in seconds.
        #[arg(long, value_name = "SECS")]
        max_delay: Option<u64>,
        /// Extra request header; may be repeated.
        #[arg(short = 'H', long = "header", value_name = "NAME: VALUE", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Show the config file path and effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(&cli)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                attempts,
                base_delay,
                max_delay,
                headers,
            } => {
                let overrides = GetOverrides {
                    url,
                    attempts,
                    base_delay_secs: base_delay,
                    max_delay_secs: max_delay,
                    headers,
                };
                run_get(&cfg, overrides)?;
            }
            CliCommand::Config => run_config(cli.config.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<RgetConfig> {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
