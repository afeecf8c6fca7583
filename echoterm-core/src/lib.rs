//! Board-agnostic core logic for the serial console
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Hexadecimal rendering of diagnostic values
//! - Character classification and the echo session state machine
//! - Console banner configuration
//! - Memory region reporting
//!
//! All I/O goes through [`echoterm_hal::Transport`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod hex;
pub mod report;

#[cfg(test)]
mod testing;

pub use config::ConsoleConfig;
pub use console::{CharClass, EchoSession, SessionState};
pub use hex::{encode_hex, HexText, HexWidth};
