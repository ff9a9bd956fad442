//! Main application entry point and CLI dispatch.
//!
//! This module stays deliberately thin: parse the command line, record the
//! custom configuration directory if one was given, and hand off to the
//! appropriate handler:
//!
//! - `args`: command-line argument parsing and help/version display
//! - `sunrise`: the full sunrise run (the default action)
//! - `commands::set`: one-shot brightness/color overrides
//!
//! Errors that reach this level are fatal by definition — bad arguments,
//! unreadable configuration, failed discovery — and produce a logged error
//! plus a non-zero exit before any device has been touched. Per-device
//! command failures never propagate up here; the run phases report and
//! swallow them, and a completed run exits zero no matter how many devices
//! misbehaved.

use dawnr::args::{self, CliAction, ParsedArgs};
use dawnr::commands;
use dawnr::config;
use dawnr::constants::EXIT_FAILURE;
use dawnr::sunrise::run_sunrise;
use dawnr::{log_end, log_error, log_pipe};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
        }
        CliAction::ShowHelp => {
            args::display_help();
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run {
            debug_enabled,
            config_dir,
            network,
            duration,
        } => {
            exit_on_error(config::set_config_dir(config_dir));
            exit_on_error(run_sunrise(network.as_deref(), duration, debug_enabled));
        }
        CliAction::SetCommand {
            debug_enabled,
            config_dir,
            network,
            brightness,
            color,
        } => {
            exit_on_error(config::set_config_dir(config_dir));
            exit_on_error(commands::set::handle_set_command(
                network.as_deref(),
                brightness,
                color,
                debug_enabled,
            ));
        }
    }
}

/// Log a fatal error in the standard format and exit non-zero.
fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(err) = result {
        log_pipe!();
        log_error!("{err:#}");
        log_end!();
        std::process::exit(EXIT_FAILURE);
    }
}
