//! Config command: show where the config lives and what is in effect.

use anyhow::Result;
use rget_core::config::{self, RgetConfig};
use std::path::Path;

/// Print the config file path and the effective config as TOML.
pub fn run_config(explicit: Option<&Path>, cfg: &RgetConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
