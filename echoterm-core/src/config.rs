//! Console configuration
//!
//! The banner text and diagnostic value shown when a session starts.
//! Firmware builds bake these in from `console.toml`; tests and hosts use
//! [`ConsoleConfig::default`].

/// Default program name line
pub const DEFAULT_PROGRAM_NAME: &str = "UART Demo Program";

/// Default welcome line
pub const DEFAULT_WELCOME: &str = "Hello from echoterm!";

/// Default diagnostic value rendered in the banner
pub const DEFAULT_DIAGNOSTIC_VALUE: u32 = 0xDEAD_BEEF;

/// Banner configuration for an echo session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// First banner line
    pub program_name: &'static str,
    /// Second banner line
    pub welcome: &'static str,
    /// Value rendered as 8 hex digits after the welcome line
    pub diagnostic_value: u32,
}

impl ConsoleConfig {
    pub const fn new(program_name: &'static str, welcome: &'static str, diagnostic_value: u32) -> Self {
        Self {
            program_name,
            welcome,
            diagnostic_value,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME, DEFAULT_WELCOME, DEFAULT_DIAGNOSTIC_VALUE)
    }
}
