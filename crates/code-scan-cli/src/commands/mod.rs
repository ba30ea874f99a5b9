//! Subcommand implementations.

pub mod list_rules;
pub mod report;

use anyhow::{Context, Result};
use code_scan::Config;

use crate::config_resolver::ConfigSource;

/// Loads the configuration the resolver settled on.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
