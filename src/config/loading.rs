//! Configuration loading functionality.
//!
//! Handles resolving the configuration path (default XDG location or a
//! custom `--config` directory), creating a default file on first run, and
//! parsing plus validating the result.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};

use super::Config;
use super::builder::create_default_config;
use super::validation::validate_config;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
/// Returns an error if already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
/// Returns None if using the default directory.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|dir| dir.clone())
}

/// Resolve the path of the configuration file.
///
/// A custom directory set via `--config` wins; otherwise the file lives in
/// the standard user configuration directory under `dawnr/`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(dir) = get_custom_config_dir() {
        return Ok(dir.join("dawnr.toml"));
    }

    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("dawnr").join("dawnr.toml"))
}

/// Load configuration using automatic path detection.
///
/// This function will create a default configuration file if none exists.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        create_default_config(&config_path)?;
    }

    load_from_path(&config_path)
}

/// Load and validate configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration at {}", path.display()))?;

    validate_config(&config)?;

    Ok(config)
}
