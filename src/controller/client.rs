//! TCP wire client for the LED controllers' command protocol.
//!
//! The controllers accept short binary command frames on a fixed TCP port.
//! A frame is an opcode, its operands, the `0x0f` terminator, and a trailing
//! checksum byte (the low byte of the sum of everything before it). The
//! controllers apply a frame immediately and do not acknowledge it, so a
//! command is considered delivered once it has been written to an
//! established connection.
//!
//! Connections are opened per command. The controllers drop idle
//! connections after a few seconds anyway, and a sunrise issues commands
//! many seconds apart, so holding a connection open buys nothing and turns
//! a device rebooting mid-run into a stale-socket problem. Connect and
//! write failures surface as per-command errors with the controller's
//! address in context; classification and recovery are the caller's
//! business.

use std::io::Write;
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::*;
use crate::controller::LightController;
use crate::slide::Rgb;

// Frame opcodes
const OP_POWER: u8 = 0x71;
const OP_COLOR: u8 = 0x31;
const OP_BRIGHTNESS: u8 = 0x41;

const POWER_ON: u8 = 0x23;
const POWER_OFF: u8 = 0x24;

const FRAME_END: u8 = 0x0f;

/// Append the checksum byte: low byte of the sum of the frame body.
fn seal_frame(mut body: Vec<u8>) -> Vec<u8> {
    let sum = body.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    body.push(sum);
    body
}

/// Handle for one discovered controller.
///
/// Carries only the controller's stable IPv4 address; every command opens
/// its own connection. Cloning a handle is cheap but the engine never needs
/// to — each run owns its handles exclusively.
#[derive(Debug, Clone)]
pub struct LedController {
    ip: Ipv4Addr,
}

impl LedController {
    pub fn new(ip: Ipv4Addr) -> Self {
        Self { ip }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    /// Open a connection, write one sealed frame, and close.
    fn send_frame(&self, body: Vec<u8>) -> Result<()> {
        let addr = SocketAddr::from((self.ip, COMMAND_PORT));
        let mut stream =
            TcpStream::connect_timeout(&addr, Duration::from_millis(CONNECT_TIMEOUT_MS))
                .with_context(|| format!("Failed to connect to controller at {}", self.ip))?;

        // Best effort; connect_timeout already bounds the slow path
        stream
            .set_write_timeout(Some(Duration::from_millis(SOCKET_TIMEOUT_MS)))
            .ok();

        stream
            .write_all(&seal_frame(body))
            .with_context(|| format!("Failed to write command frame to {}", self.ip))?;

        Ok(())
    }
}

impl LightController for LedController {
    fn set_power(&mut self, on: bool) -> Result<()> {
        let state = if on { POWER_ON } else { POWER_OFF };
        self.send_frame(vec![OP_POWER, state, FRAME_END])
    }

    fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.send_frame(vec![OP_BRIGHTNESS, level, FRAME_END])
    }

    fn set_color(&mut self, color: Rgb) -> Result<()> {
        self.send_frame(vec![
            OP_COLOR,
            color.red,
            color.green,
            color.blue,
            0x00,
            FRAME_END,
        ])
    }

    fn address(&self) -> String {
        self.ip.to_string()
    }
}

impl std::fmt::Display for LedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ip)
    }
}
