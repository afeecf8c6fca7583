//! Console configuration
//!
//! Compiled in from `console.toml` by the build script, which has already
//! validated every value.

use echoterm_core::ConsoleConfig;
use echoterm_hal::uart::{DataBits, Parity, StopBits, UartConfig};

include!(concat!(env!("OUT_DIR"), "/console_config.rs"));
