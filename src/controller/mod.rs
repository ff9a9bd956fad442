//! Controller abstraction layer for networked LED lighting fixtures.
//!
//! This module provides the command contract the sunrise engine drives
//! devices through, plus the two concrete pieces that make the binary work
//! against real hardware:
//!
//! - [`LightController`]: the per-device command sink. Every command is
//!   independently fallible; the engine treats a handle as an opaque remote
//!   sink and never interprets failures beyond reporting them.
//! - [`client`]: the TCP wire client implementing the contract for the
//!   controllers' binary frame protocol.
//! - [`discovery`]: UDP broadcast probing of a network range, producing the
//!   set of reachable controller handles for one run.
//!
//! The engine only ever uses the trait, so tests can substitute in-memory
//! controllers and the wire format stays fully contained in `client`.

use anyhow::Result;

use crate::slide::Rgb;

pub mod client;
pub mod discovery;

pub use client::LedController;
pub use discovery::discover;

/// Command interface of one networked lighting controller.
///
/// Commands for different handles are safe to issue concurrently; commands
/// for the *same* handle are not, which the `&mut self` receivers make
/// structural — the fan-out executor hands each device task an exclusive
/// borrow.
pub trait LightController {
    /// Switch the fixture on or off.
    fn set_power(&mut self, on: bool) -> Result<()>;

    /// Set the global brightness level (device range 1-32).
    fn set_brightness(&mut self, level: u8) -> Result<()>;

    /// Set the fixture color.
    fn set_color(&mut self, color: Rgb) -> Result<()>;

    /// Stable network address of the controller, for diagnostics only.
    fn address(&self) -> String;
}
