//! Application-wide constants and default values.

/// Default total sunrise duration in minutes.
pub const DEFAULT_DURATION_MINUTES: u64 = 30;

/// Minimum accepted sunrise duration in minutes.
pub const MINIMUM_DURATION_MINUTES: u64 = 1;

/// Maximum accepted sunrise duration in minutes (one day).
pub const MAXIMUM_DURATION_MINUTES: u64 = 1440;

/// Number of discrete steps in one sunrise timeline.
pub const TICK_COUNT: u32 = 100;

/// Pacing between consecutive commands during controller initialization.
pub const COMMAND_PACING_MS: u64 = 100;

/// Number of best-effort rounds of the initialization sequence per controller.
pub const INIT_ROUNDS: u32 = 5;

/// Lowest brightness level the controllers accept.
pub const MINIMUM_BRIGHTNESS: u8 = 1;

/// Highest brightness level the controllers accept.
pub const MAXIMUM_BRIGHTNESS: u8 = 32;

/// Default ramp starting brightness (near-dark).
pub const DEFAULT_FROM_BRIGHTNESS: u8 = 1;

/// Default ramp ending brightness (full device range).
pub const DEFAULT_TO_BRIGHTNESS: u8 = 32;

/// Default ramp starting color: deep red dawn.
pub const DEFAULT_FROM_COLOR: &str = "255,32,0";

/// Default ramp ending color: warm morning white.
pub const DEFAULT_TO_COLOR: &str = "255,192,32";

/// UDP port the controllers listen on for discovery probes.
pub const DISCOVERY_PORT: u16 = 48899;

/// Probe datagram the controllers answer to.
pub const DISCOVERY_PROBE: &[u8] = b"HF-A11ASSISTHREAD";

/// Number of probe datagrams sent per discovery pass.
pub const DISCOVERY_PROBE_COUNT: u32 = 3;

/// How long discovery keeps collecting replies after the first probe.
pub const DISCOVERY_WINDOW_MS: u64 = 1000;

/// TCP port the controllers accept command frames on.
pub const COMMAND_PORT: u16 = 5577;

/// Timeout for establishing a command connection to one controller.
pub const CONNECT_TIMEOUT_MS: u64 = 1000;

/// Timeout for socket read/write operations on an established connection.
pub const SOCKET_TIMEOUT_MS: u64 = 1000;

/// Standard failure exit code.
pub const EXIT_FAILURE: i32 = 1;
