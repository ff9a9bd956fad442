//! Configuration file building and default config creation.
//!
//! Handles creating the commented default configuration file on first run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::*;

/// The commented default configuration, written verbatim on first run.
///
/// The network range is left commented out: there is no sensible default
/// for someone else's network, and the CLI accepts it positionally anyway.
fn default_config_content() -> String {
    format!(
        "\
#[Network]
# network = \"172.16.32.0/24\"  # Network range to probe for controllers

#[Sunrise]
duration_minutes = {DEFAULT_DURATION_MINUTES}       # Total sunrise duration in minutes ({MINIMUM_DURATION_MINUTES}-{MAXIMUM_DURATION_MINUTES})
from_brightness = {DEFAULT_FROM_BRIGHTNESS}          # Ramp starting brightness ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS})
to_brightness = {DEFAULT_TO_BRIGHTNESS}           # Ramp ending brightness ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS})
from_color = \"{DEFAULT_FROM_COLOR}\"   # Ramp starting color as R,G,B
to_color = \"{DEFAULT_TO_COLOR}\"  # Ramp ending color as R,G,B
"
    )
}

/// Create a default config file at the given path.
///
/// Creates parent directories as needed and reports the new file's location
/// so first-time users know where to edit.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create configuration directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration at {}", path.display());

    Ok(())
}
