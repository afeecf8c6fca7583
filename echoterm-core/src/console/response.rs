//! What gets sent back for a received byte

use super::class::CharClass;
use super::messages::{CRLF, ERASE, EXIT_BANNER, NON_PRINTABLE_NOTICE, TAB_SPACES};

/// Response to one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Send the received byte back unchanged
    Echo(u8),
    /// Send a fixed sequence instead of the received byte
    Text(&'static [u8]),
    /// Send the exit banner and end the session
    Exit,
}

impl Response {
    /// Response for a received byte
    pub const fn for_byte(byte: u8) -> Self {
        match CharClass::of(byte) {
            CharClass::CarriageReturn | CharClass::LineFeed => Response::Text(CRLF),
            CharClass::Backspace => Response::Text(ERASE),
            CharClass::Tab => Response::Text(TAB_SPACES),
            CharClass::Printable => Response::Echo(byte),
            CharClass::NonPrintable => Response::Text(NON_PRINTABLE_NOTICE),
            CharClass::Quit => Response::Exit,
        }
    }

    /// Check if this response ends the session
    pub const fn is_exit(&self) -> bool {
        matches!(self, Response::Exit)
    }
}
