//! Memory region reporting
//!
//! Renders the bounds of a linker-defined region (e.g. `.bss`) and a
//! sample of its contents through the transport. Report-only: nothing
//! here influences the echo session.

use echoterm_hal::{MemoryRegion, Transport};

use crate::console::messages::CRLF;
use crate::hex::{encode_u32, encode_usize};

/// Send one `"<label> <field>: <hex>"` line
fn send_field<T: Transport>(transport: &mut T, label: &str, field: &[u8], value: usize) -> Result<(), T::Error> {
    transport.send_text(label.as_bytes())?;
    transport.send_byte(b' ')?;
    transport.send_text(field)?;
    transport.send_text(b": ")?;
    transport.send_text(encode_usize(value).as_bytes())?;
    transport.send_text(CRLF)
}

/// Report the size, start and end of a region
///
/// Values are rendered at the target's native address width.
pub fn send_region<T: Transport>(transport: &mut T, label: &str, region: &MemoryRegion) -> Result<(), T::Error> {
    send_field(transport, label, b"size", region.size())?;
    send_field(transport, label, b"start", region.start())?;
    send_field(transport, label, b"end", region.end())
}

/// Send each byte as an 8-digit hex value followed by a space, then CRLF
pub fn send_dump<T, I>(transport: &mut T, bytes: I) -> Result<(), T::Error>
where
    T: Transport,
    I: IntoIterator<Item = u8>,
{
    for byte in bytes {
        transport.send_text(encode_u32(u32::from(byte)).as_bytes())?;
        transport.send_byte(b' ')?;
    }
    transport.send_text(CRLF)
}
