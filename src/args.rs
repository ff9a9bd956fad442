//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

use std::time::Duration;

use crate::slide::Rgb;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run a full sunrise with these settings
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
        network: Option<String>,
        duration: Option<Duration>,
    },
    /// Apply one-shot brightness/color overrides to all discovered controllers
    SetCommand {
        debug_enabled: bool,
        config_dir: Option<String>,
        network: Option<String>,
        brightness: Option<u8>,
        color: Option<Rgb>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse the process's own arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }

    /// Parse command-line arguments into a structured result.
    ///
    /// This function processes the arguments and determines what action
    /// should be taken, including whether to show help, version info, or run
    /// normally.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Positional arguments left over after flag processing
        let mut positional: Vec<String> = Vec::new();

        let mut i = 0;
        while i < args_vec.len() {
            match args_vec[i].as_str() {
                "--help" | "-h" => return ParsedArgs { action: CliAction::ShowHelp },
                "--version" | "-V" => return ParsedArgs { action: CliAction::ShowVersion },
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => {
                    if i + 1 >= args_vec.len() {
                        return ParsedArgs { action: CliAction::ShowHelpDueToError };
                    }
                    config_dir = Some(args_vec[i + 1].clone());
                    i += 1;
                }
                "set" | "s" if positional.is_empty() => {
                    // Everything after the subcommand is parsed by its own handler
                    let rest = &args_vec[i + 1..];
                    return parse_set_command(rest, debug_enabled, config_dir);
                }
                arg if arg.starts_with('-') => {
                    return ParsedArgs { action: CliAction::ShowHelpDueToError };
                }
                arg => positional.push(arg.to_string()),
            }
            i += 1;
        }

        // Default action: run a sunrise with optional network and duration
        if positional.len() > 2 {
            return ParsedArgs { action: CliAction::ShowHelpDueToError };
        }

        let network = positional.first().cloned();
        let duration = match positional.get(1) {
            Some(spec) => match parse_duration(spec) {
                Some(duration) => Some(duration),
                None => return ParsedArgs { action: CliAction::ShowHelpDueToError },
            },
            None => None,
        };

        ParsedArgs {
            action: CliAction::Run {
                debug_enabled,
                config_dir,
                network,
                duration,
            },
        }
    }
}

/// Parse the arguments following the `set` subcommand.
fn parse_set_command(
    args: &[String],
    mut debug_enabled: bool,
    mut config_dir: Option<String>,
) -> ParsedArgs {
    let mut network: Option<String> = None;
    let mut brightness: Option<u8> = None;
    let mut color: Option<Rgb> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return ParsedArgs { action: CliAction::ShowHelp },
            "--debug" | "-d" => debug_enabled = true,
            "--config" | "-c" => {
                if i + 1 >= args.len() {
                    return ParsedArgs { action: CliAction::ShowHelpDueToError };
                }
                config_dir = Some(args[i + 1].clone());
                i += 1;
            }
            "--brightness" | "-b" => {
                let Some(value) = args.get(i + 1) else {
                    return ParsedArgs { action: CliAction::ShowHelpDueToError };
                };
                match value.parse::<u8>() {
                    Ok(level) => brightness = Some(level),
                    Err(_) => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                }
                i += 1;
            }
            "--color" | "-C" => {
                let Some(value) = args.get(i + 1) else {
                    return ParsedArgs { action: CliAction::ShowHelpDueToError };
                };
                match value.parse::<Rgb>() {
                    Ok(rgb) => color = Some(rgb),
                    Err(_) => return ParsedArgs { action: CliAction::ShowHelpDueToError },
                }
                i += 1;
            }
            arg if arg.starts_with('-') => {
                return ParsedArgs { action: CliAction::ShowHelpDueToError };
            }
            arg if network.is_none() => network = Some(arg.to_string()),
            _ => return ParsedArgs { action: CliAction::ShowHelpDueToError },
        }
        i += 1;
    }

    ParsedArgs {
        action: CliAction::SetCommand {
            debug_enabled,
            config_dir,
            network,
            brightness,
            color,
        },
    }
}

/// Parse a human-readable duration like "30m", "90s", "1h" or "1h30m".
///
/// Accepts a sequence of `<integer><unit>` segments with units `h`, `m`,
/// and `s`. Returns None for anything else, including bare numbers — a
/// unitless duration is ambiguous and silently guessing minutes has burned
/// people before.
pub fn parse_duration(spec: &str) -> Option<Duration> {
    if spec.is_empty() {
        return None;
    }

    let mut total_secs: u64 = 0;
    let mut digits = String::new();
    let mut saw_segment = false;

    for ch in spec.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }

        let value: u64 = digits.parse().ok()?;
        digits.clear();
        saw_segment = true;

        let unit_secs = match ch {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total_secs = total_secs.checked_add(value.checked_mul(unit_secs)?)?;
    }

    // Trailing digits without a unit
    if !digits.is_empty() || !saw_segment {
        return None;
    }

    Some(Duration::from_secs(total_secs))
}

/// Displays version information using logger formatting.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("dawnr [OPTIONS] [NETWORK] [DURATION]");
    log_indented!("dawnr set [OPTIONS] [NETWORK] [--brightness <n>] [--color <r,g,b>]");
    log_block_start!("Arguments:");
    log_indented!("NETWORK                Network range to probe (e.g. 172.16.32.0/24)");
    log_indented!("DURATION               Sunrise duration, e.g. 30m, 90s, 1h30m (default 30m)");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("set, s                 Apply brightness/color once to all controllers");
    log_indented!("    -b, --brightness <n>      Brightness level (1-32)");
    log_indented!("    -C, --color <r,g,b>       Color, e.g. 255,192,32");
    log_pipe!();
    log_info!("Omitted arguments fall back to the configuration file.");
    log_end!();
}
