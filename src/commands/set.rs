//! Set command implementation for one-shot controller overrides.
//!
//! Discovers the controllers on the configured network range and applies the
//! given brightness and/or color once to all of them, with no interpolation
//! and no timeline. Handy for resetting a room after a run or checking that
//! controllers respond at all.

use anyhow::Result;

use crate::config::Config;
use crate::constants::*;
use crate::controller::{LightController, discover};
use crate::fanout::fan_out;
use crate::slide::Rgb;

/// Handle the set command - apply overrides once to every controller.
pub fn handle_set_command(
    network_override: Option<&str>,
    brightness: Option<u8>,
    color: Option<Rgb>,
    debug_enabled: bool,
) -> Result<()> {
    log_version!();

    if brightness.is_none() && color.is_none() {
        log_pipe!();
        log_warning!("Nothing to set: pass --brightness and/or --color");
        log_end!();
        return Ok(());
    }

    if let Some(level) = brightness
        && !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&level)
    {
        anyhow::bail!(
            "brightness ({}) must be between {} and {}",
            level,
            MINIMUM_BRIGHTNESS,
            MAXIMUM_BRIGHTNESS
        );
    }

    let config = Config::load()?;
    let network = match network_override {
        Some(network) => network.to_string(),
        None => config.network.clone().ok_or_else(|| {
            anyhow::anyhow!("No network range given on the command line or in the configuration")
        })?,
    };

    log_block_start!("Discovering controllers on {network}");
    let mut controllers = discover(&network, debug_enabled)?;
    log_decorated!("Found {} controller(s)", controllers.len());

    log_block_start!("Applying overrides");
    fan_out(&mut controllers, |controller| {
        if let Some(color) = color
            && let Err(err) = controller.set_color(color)
        {
            log_warning!("Setting color on {}: {err:#}", controller.address());
        }
        if let Some(level) = brightness
            && let Err(err) = controller.set_brightness(level)
        {
            log_warning!("Setting brightness on {}: {err:#}", controller.address());
        }
    });

    log_block_start!("Done");
    log_end!();
    Ok(())
}
