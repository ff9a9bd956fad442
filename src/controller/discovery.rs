//! UDP broadcast discovery of controllers on a network range.
//!
//! The controllers answer a well-known probe datagram on their discovery
//! port with a single `ip,id,model` line. Discovery sends the probe to the
//! range's broadcast address a few times, then collects replies until the
//! discovery window closes. Replies from outside the probed range are
//! ignored (directed broadcasts can leak answers from neighboring
//! segments), as are re-announcements from controllers that already
//! answered.
//!
//! Discovery failure is fatal to a run: a sunrise with zero controllers is
//! not a sunrise, and partial discovery cannot be distinguished from an
//! empty segment, so the caller gets an error rather than an empty set.

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::constants::*;
use crate::controller::LedController;

/// An IPv4 network range in CIDR notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    address: Ipv4Addr,
    prefix: u8,
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (address, prefix) = s
            .split_once('/')
            .with_context(|| format!("'{}' is not in CIDR notation (e.g. 172.16.32.0/24)", s))?;

        let address: Ipv4Addr = address
            .parse()
            .with_context(|| format!("'{}' is not a valid IPv4 address", address))?;

        let prefix: u8 = prefix
            .parse()
            .with_context(|| format!("'{}' is not a valid prefix length", prefix))?;

        // /31 and /32 have no broadcast address, so there is nothing to probe
        if prefix > 30 {
            anyhow::bail!("prefix /{} leaves no addresses to probe (maximum /30)", prefix);
        }

        Ok(Self { address, prefix })
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl Network {
    fn mask(&self) -> u32 {
        if self.prefix == 0 {
            0
        } else {
            u32::MAX << (32 - self.prefix)
        }
    }

    /// The range's broadcast address (all host bits set).
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.address) | !self.mask())
    }

    /// Whether the given address falls inside this range.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask() == u32::from(self.address) & self.mask()
    }
}

/// Probe a network range and return a handle for every controller that
/// answered.
///
/// Sends the discovery probe to the range's broadcast address, then reads
/// replies until the discovery window closes. Returns an error if the range
/// cannot be parsed, the probe socket cannot be set up, or no controller
/// answered at all.
pub fn discover(network: &str, debug_enabled: bool) -> Result<Vec<LedController>> {
    let network: Network = network.parse()?;
    let target = SocketAddr::from((network.broadcast(), DISCOVERY_PORT));

    let socket = UdpSocket::bind("0.0.0.0:0").context("Failed to bind discovery socket")?;
    socket
        .set_broadcast(true)
        .context("Failed to enable broadcast on discovery socket")?;
    socket
        .set_read_timeout(Some(Duration::from_millis(100)))
        .context("Failed to set discovery read timeout")?;

    for _ in 0..DISCOVERY_PROBE_COUNT {
        socket
            .send_to(DISCOVERY_PROBE, target)
            .with_context(|| format!("Failed to send discovery probe to {target}"))?;
    }

    let mut found: Vec<LedController> = Vec::new();
    let mut buffer = [0u8; 128];
    let deadline = Instant::now() + Duration::from_millis(DISCOVERY_WINDOW_MS);

    while Instant::now() < deadline {
        let (length, source) = match socket.recv_from(&mut buffer) {
            Ok(reply) => reply,
            // Read timeout; keep collecting until the window closes
            Err(_) => continue,
        };

        let SocketAddr::V4(source) = source else {
            continue;
        };
        let ip = *source.ip();

        if !network.contains(ip) {
            if debug_enabled {
                log_debug!("Ignoring discovery reply from {ip} (outside {network})");
            }
            continue;
        }
        if found.iter().any(|controller| controller.ip() == ip) {
            continue;
        }

        if debug_enabled {
            let reply = String::from_utf8_lossy(&buffer[..length]);
            log_debug!("Discovery reply from {ip}: {}", reply.trim());
        }

        found.push(LedController::new(ip));
    }

    if found.is_empty() {
        anyhow::bail!("No controllers answered on {network}");
    }

    Ok(found)
}
