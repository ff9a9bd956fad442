//! Structured logging system with visual formatting.
//!
//! This module provides a logging system designed for dawnr's visual output
//! style. It includes different log levels and special formatting macros for
//! creating structured output with Unicode box drawing characters.
//!
//! The logger supports runtime enable/disable functionality for quiet
//! operation during automated processes or testing.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

// Use an AtomicBool instead of thread_local for thread safety
static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface providing structured output formatting.
///
/// ## Logging Conventions
///
/// - **`log_block_start!`**: initiates a new conceptual block of log
///   information (phase changes, significant events). Prepends an empty pipe
///   `┃` for spacing, then prints `┣ message`. Subsequent related messages
///   within the block should use `log_decorated!` or `log_indented!`.
/// - **`log_decorated!`**: a message that is part of an existing block, or a
///   standalone single-line status. Prints `┣ message`.
/// - **`log_indented!`**: nested data or per-item details belonging to a
///   parent message. Prints `┃   message`.
/// - **`log_pipe!`**: inserts a single empty prefixed line (`┃`) for vertical
///   spacing, typically before `log_warning!`/`log_error!` or before logging
///   an `anyhow` error message. Not for use at the end of a block.
/// - **`log_version!`**: prints the application startup header once.
/// - **`log_end!`**: prints the final log termination marker `╹` once.
/// - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`**: standard
///   semantic macros with a `[LEVEL]` prefix for messages that don't fit the
///   box-drawing flow. They ought to begin with a `log_pipe!` when starting
///   a new conceptual block.
pub struct Log;

impl Log {
    /// Enable or disable logging temporarily.
    ///
    /// This is useful for quiet operation during automated processes
    /// or testing where log output would interfere with results.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

// Public function that routes output (needed by macros)
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

// # Logging Macros

/// Log a decorated message, typically as part of an existing block or for standalone emphasis.
#[macro_export]
macro_rules! log_decorated {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┣ {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┣ {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log an indented message for sub-items or details within a block.
#[macro_export]
macro_rules! log_indented {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┃   {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┃   {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block of information.
#[macro_export]
macro_rules! log_block_start {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┃\n┣ {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┃\n┣ {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            let formatted = format!("┏ dawnr v{version} ━━╸\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log an informational message with pipe prefix and blue-colored level.
#[macro_export]
macro_rules! log_info {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┣[\x1b[34mINFO\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┣[\x1b[34mINFO\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored level.
#[macro_export]
macro_rules! log_warning {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┣[\x1b[33mWARNING\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log an error message with pipe prefix and red-colored level.
#[macro_export]
macro_rules! log_error {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┣[\x1b[31mERROR\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┣[\x1b[31mERROR\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}

/// Log a debug message with pipe prefix and magenta-colored level.
#[macro_export]
macro_rules! log_debug {
    // Format string literal (with or without args) - always pass through format!
    ($fmt:literal $($arg:tt)*) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            let formatted = format!("┣[\x1b[35mDEBUG\x1b[0m] {message}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
    // Non-literal expression - convert to string
    ($expr:expr) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let expr = $expr;
            let formatted = format!("┣[\x1b[35mDEBUG\x1b[0m] {expr}\n");
            $crate::logger::write_output(&formatted);
        }
    }};
}
