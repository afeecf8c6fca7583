//! Echoterm Hardware Abstraction Layer
//!
//! This crate defines the narrow contract between the console core and the
//! hardware it talks through. Chip-specific crates (RP2040, ...) provide the
//! devices; the core only ever sees the traits and plain types defined here.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  echoterm-firmware / echoterm-core      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  echoterm-hal (this crate)              │
//! │  Transport · UartConfig · reg · memory  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  echoterm-hal-rp2040 (chip glue)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Contents
//!
//! - [`transport::Transport`] - Byte-oriented serial transport
//! - [`transport::IoTransport`] - Adapter over `embedded-io` devices
//! - [`uart::UartConfig`] - Line settings
//! - [`reg`] - Volatile register accessor (the only `unsafe` surface)
//! - [`memory::MemoryRegion`] - Read-only view of a linker-defined region

#![no_std]
#![deny(unsafe_code)]

#[allow(unsafe_code)]
pub mod memory;
#[allow(unsafe_code)]
pub mod reg;
pub mod transport;
pub mod uart;

// Re-export key types at crate root for convenience
pub use memory::MemoryRegion;
pub use reg::{Register, RegisterWidth};
pub use transport::{IoTransport, Transport};
pub use uart::UartConfig;
