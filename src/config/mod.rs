//! Configuration system for dawnr with validation and default generation.
//!
//! This module provides configuration management for the dawnr application,
//! handling the TOML configuration file, validation, and default value
//! generation.
//!
//! ## Configuration Sources
//!
//! The configuration lives at `$XDG_CONFIG_HOME/dawnr/dawnr.toml`. A custom
//! directory can be selected once per process with `--config <dir>`, in
//! which case `<dir>/dawnr.toml` is used instead. A commented default file
//! is created on first run.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Network]
//! network = "172.16.32.0/24" # Network range to probe for controllers
//!
//! #[Sunrise]
//! duration_minutes = 30      # Total sunrise duration in minutes (1-1440)
//! from_brightness = 1        # Ramp starting brightness (1-32)
//! to_brightness = 32         # Ramp ending brightness (1-32)
//! from_color = "255,32,0"    # Ramp starting color as R,G,B
//! to_color = "255,192,32"    # Ramp ending color as R,G,B
//! ```
//!
//! Command-line arguments override configuration values; configuration
//! values override built-in defaults.
//!
//! ## Validation
//!
//! Loading validates brightness endpoints against the controllers' device
//! range, color strings against the `R,G,B` format, the duration against a
//! sane window, and the network range against CIDR notation. Invalid
//! configurations produce error messages naming the offending field.

pub mod builder;
pub mod loading;
pub mod validation;

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::*;
use crate::slide::{Rgb, Slide};

// Re-export public API
pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path, set_config_dir};

/// User configuration, straight from `dawnr.toml`.
///
/// Every field is optional; accessors fall back to the built-in sunrise
/// preset so an empty file (or none at all) still produces a working run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Network range to probe for controllers, in CIDR notation.
    pub network: Option<String>,
    /// Total sunrise duration in minutes.
    pub duration_minutes: Option<u64>,
    /// Ramp starting brightness (device range 1-32).
    pub from_brightness: Option<u8>,
    /// Ramp ending brightness (device range 1-32).
    pub to_brightness: Option<u8>,
    /// Ramp starting color as "R,G,B".
    pub from_color: Option<String>,
    /// Ramp ending color as "R,G,B".
    pub to_color: Option<String>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        loading::load()
    }

    /// Total sunrise duration, defaulting to the 30-minute preset.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(60 * self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
    }

    /// The configured ramp endpoints, with preset defaults filled in.
    pub fn slide(&self) -> Result<Slide> {
        let from_color: Rgb = self
            .from_color
            .as_deref()
            .unwrap_or(DEFAULT_FROM_COLOR)
            .parse()
            .context("Invalid from_color in configuration")?;
        let to_color: Rgb = self
            .to_color
            .as_deref()
            .unwrap_or(DEFAULT_TO_COLOR)
            .parse()
            .context("Invalid to_color in configuration")?;

        Ok(Slide {
            from_brightness: self.from_brightness.unwrap_or(DEFAULT_FROM_BRIGHTNESS),
            to_brightness: self.to_brightness.unwrap_or(DEFAULT_TO_BRIGHTNESS),
            from_color,
            to_color,
        })
    }

    /// Log the effective configuration in the standard startup block.
    pub fn log_display(&self) {
        let slide = match self.slide() {
            Ok(slide) => slide,
            // Validation already rejected unparseable colors
            Err(_) => return,
        };

        log_block_start!("Configuration");
        match &self.network {
            Some(network) => log_indented!("Network range: {network}"),
            None => log_indented!("Network range: (from command line)"),
        }
        log_indented!(
            "Duration: {} minutes",
            self.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES)
        );
        log_indented!(
            "Brightness: {} -> {}",
            slide.from_brightness,
            slide.to_brightness
        );
        log_indented!("Color: {} -> {}", slide.from_color, slide.to_color);
    }
}
