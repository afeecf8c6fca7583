//! RP2040-specific HAL glue for the serial console
//!
//! This crate maps the chip-agnostic `echoterm-hal` types onto RP2040:
//! - UART line configuration for `embassy-rp`
//! - `.bss` bounds from the cortex-m-rt linker script
//!
//! The transport itself is `echoterm_hal::IoTransport` over an
//! `embassy_rp::uart::BufferedUart`.

#![no_std]

pub mod memory;
pub mod uart;

// Re-export shared types from echoterm-hal for convenience
pub use echoterm_hal::{IoTransport, MemoryRegion, Transport, UartConfig};
