//! # Dawnr Library
//!
//! Internal library for the dawnr binary application.
//!
//! This library exists to enable testing of the sunrise engine internals and
//! to provide clean separation between CLI dispatch (main.rs) and application
//! logic.
//!
//! ## Architecture
//!
//! - **Interpolation**: `slide` module — pure brightness/color ramp math
//! - **Controllers**: `controller` module — the `LightController` command
//!   contract, the TCP wire client, and UDP network discovery
//! - **Engine**: `sunrise` module — initialization phase and the 100-tick
//!   timeline driver
//! - **Concurrency**: `fanout` module — one-action-per-controller dispatch
//!   with a full join barrier
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for one-shot CLI subcommands
//! - **Infrastructure**: argument parsing and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod controller;
pub mod fanout;
pub mod slide;
pub mod sunrise;
