//! Fixed console messages

/// Line ending sent for CR/LF and after banner lines
pub const CRLF: &[u8] = b"\r\n";

/// Erase one column: backspace, space, backspace
pub const ERASE: &[u8] = b"\x08 \x08";

/// Tab expansion
pub const TAB_SPACES: &[u8] = b"    ";

/// Sent instead of a byte outside the printable range
pub const NON_PRINTABLE_NOTICE: &[u8] = b"\r\n[Non-printable character received]\r\n";

/// Sent when a quit key ends the session
pub const EXIT_BANNER: &[u8] = b"\r\nExiting echo mode.\r\n";

/// Precedes the diagnostic value in the start banner
pub const HEX_LABEL: &[u8] = b"Sending hex value: ";

/// Last banner line before input is accepted
pub const ECHO_PROMPT: &[u8] = b"Starting echo mode (press 'q' to quit):\r\n";
