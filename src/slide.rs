//! Pure interpolation model for one sunrise ramp.
//!
//! A [`Slide`] holds the fixed start and end points of a run — a brightness
//! level and an RGB color each — and maps a progress fraction in `[0, 1]` to
//! the target values for that moment. The math is plain linear interpolation
//! per channel, truncated toward zero to an integer. No rounding: the device
//! ranges are coarse and the observed controller behavior relies on values
//! stepping up exactly when the truncated integer changes.
//!
//! The model is pure and idempotent; all I/O, pacing, and failure handling
//! live elsewhere.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

/// An RGB color with one byte per channel.
///
/// Parses from and displays as `"R,G,B"`, the format used by the
/// configuration file and the `--color` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 3 {
            anyhow::bail!("cannot parse '{}' as R,G,B", s);
        }

        let channel = |index: usize, name: &str| -> Result<u8> {
            fields[index]
                .trim()
                .parse::<u8>()
                .with_context(|| format!("{} channel '{}' must be 0-255", name, fields[index]))
        };

        Ok(Self {
            red: channel(0, "red")?,
            green: channel(1, "green")?,
            blue: channel(2, "blue")?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

/// Immutable endpoints of one sunrise ramp.
///
/// Fixed for the lifetime of a run; set once at startup from the
/// configuration (or the built-in sunrise preset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub from_brightness: u8,
    pub to_brightness: u8,
    pub from_color: Rgb,
    pub to_color: Rgb,
}

/// One channel of `from + (to - from) * progress`, truncated toward zero.
fn interpolate_channel(from: u8, to: u8, progress: f64) -> u8 {
    let delta = (f64::from(to) - f64::from(from)) * progress;
    (f64::from(from) + delta) as u8
}

impl Slide {
    /// Interpolated brightness level at the given progress fraction.
    ///
    /// `progress` 0.0 returns the starting brightness exactly; 1.0 returns
    /// the ending brightness up to truncation error.
    pub fn brightness(&self, progress: f64) -> u8 {
        interpolate_channel(self.from_brightness, self.to_brightness, progress)
    }

    /// Interpolated color at the given progress fraction.
    ///
    /// Each channel is interpolated independently.
    pub fn color(&self, progress: f64) -> Rgb {
        Rgb {
            red: interpolate_channel(self.from_color.red, self.to_color.red, progress),
            green: interpolate_channel(self.from_color.green, self.to_color.green, progress),
            blue: interpolate_channel(self.from_color.blue, self.to_color.blue, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The classic sunrise preset: near-dark deep red to bright warm white
    fn sunrise() -> Slide {
        Slide {
            from_brightness: 1,
            to_brightness: 32,
            from_color: Rgb::new(255, 32, 0),
            to_color: Rgb::new(255, 192, 32),
        }
    }

    #[test]
    fn test_brightness_endpoints() {
        let slide = sunrise();
        assert_eq!(slide.brightness(0.0), 1);
        assert_eq!(slide.brightness(1.0), 32);
    }

    #[test]
    fn test_brightness_midpoint_truncates_toward_zero() {
        // 1 + 31 * 0.5 = 16.5, truncated to 16 (never rounded to 17)
        assert_eq!(sunrise().brightness(0.5), 16);
    }

    #[test]
    fn test_color_endpoints() {
        let slide = sunrise();
        assert_eq!(slide.color(0.0), Rgb::new(255, 32, 0));
        assert_eq!(slide.color(1.0), Rgb::new(255, 192, 32));
    }

    #[test]
    fn test_color_channels_interpolate_independently() {
        let color = sunrise().color(0.5);
        assert_eq!(color.red, 255); // constant channel stays put
        assert_eq!(color.green, 112); // 32 + 160 * 0.5
        assert_eq!(color.blue, 16); // 0 + 32 * 0.5
    }

    #[test]
    fn test_descending_ramp() {
        let slide = Slide {
            from_brightness: 32,
            to_brightness: 1,
            from_color: Rgb::new(255, 192, 32),
            to_color: Rgb::new(255, 32, 0),
        };
        assert_eq!(slide.brightness(0.0), 32);
        assert_eq!(slide.brightness(1.0), 1);
        // 32 - 31 * 0.5 = 16.5, truncated to 16
        assert_eq!(slide.brightness(0.5), 16);
    }

    #[test]
    fn test_interpolation_is_idempotent() {
        let slide = sunrise();
        for tick in 0..=100u32 {
            let progress = f64::from(tick) / 100.0;
            assert_eq!(slide.brightness(progress), slide.brightness(progress));
            assert_eq!(slide.color(progress), slide.color(progress));
        }
    }

    #[test]
    fn test_rgb_parses_from_string() {
        let color: Rgb = "255,32,0".parse().unwrap();
        assert_eq!(color, Rgb::new(255, 32, 0));

        let padded: Rgb = " 10, 20, 30 ".parse().unwrap();
        assert_eq!(padded, Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_rgb_rejects_malformed_strings() {
        assert!("255,32".parse::<Rgb>().is_err());
        assert!("255,32,0,0".parse::<Rgb>().is_err());
        assert!("255,32,blue".parse::<Rgb>().is_err());
        assert!("256,0,0".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_display_round_trip() {
        let color = Rgb::new(255, 192, 32);
        assert_eq!(color.to_string(), "255,192,32");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }
}
