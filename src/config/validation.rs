//! Configuration validation functionality.
//!
//! Validates every configured field once at load time so the run phases can
//! trust their inputs: brightness endpoints within the controllers' device
//! range, colors in `R,G,B` form, the duration within a sane window, and
//! the network range in CIDR notation.

use anyhow::Result;

use super::Config;
use crate::constants::*;
use crate::controller::discovery::Network;
use crate::slide::Rgb;

/// Validate a brightness endpoint against the controllers' device range.
fn validate_brightness(field: &str, level: u8) -> Result<()> {
    if !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&level) {
        anyhow::bail!(
            "{} ({}) must be between {} and {}",
            field,
            level,
            MINIMUM_BRIGHTNESS,
            MAXIMUM_BRIGHTNESS
        );
    }
    Ok(())
}

/// Validate a color endpoint as a parseable R,G,B triple.
fn validate_color(field: &str, value: &str) -> Result<()> {
    if let Err(err) = value.parse::<Rgb>() {
        anyhow::bail!("{} (\"{}\") is not a valid R,G,B color: {}", field, value, err);
    }
    Ok(())
}

/// Comprehensive configuration validation to prevent broken runs.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(network) = &config.network
        && let Err(err) = network.parse::<Network>()
    {
        anyhow::bail!("network (\"{}\") is not a valid range: {}", network, err);
    }

    if let Some(minutes) = config.duration_minutes
        && !(MINIMUM_DURATION_MINUTES..=MAXIMUM_DURATION_MINUTES).contains(&minutes)
    {
        anyhow::bail!(
            "duration_minutes ({}) must be between {} and {} minutes",
            minutes,
            MINIMUM_DURATION_MINUTES,
            MAXIMUM_DURATION_MINUTES
        );
    }

    if let Some(level) = config.from_brightness {
        validate_brightness("from_brightness", level)?;
    }
    if let Some(level) = config.to_brightness {
        validate_brightness("to_brightness", level)?;
    }

    if let Some(color) = &config.from_color {
        validate_color("from_color", color)?;
    }
    if let Some(color) = &config.to_color {
        validate_color("to_color", color)?;
    }

    Ok(())
}
