//! Command-line command handlers for dawnr.
//!
//! This module contains implementations for one-shot CLI commands. Each
//! command is implemented in its own submodule to keep the code organized.

pub mod set;
