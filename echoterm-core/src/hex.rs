//! Fixed-width hexadecimal rendering
//!
//! Values are rendered as uppercase ASCII hex digits, most significant
//! nibble first, zero-padded to the full width. No `0x` prefix and no
//! terminator: framing is the transport's business.

use heapless::String;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Longest rendering (64-bit value)
pub const MAX_HEX_DIGITS: usize = 16;

/// Rendered width of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexWidth {
    Bits32,
    Bits64,
}

impl HexWidth {
    /// Width matching the target's pointer size
    pub const NATIVE: HexWidth = if usize::BITS > 32 {
        HexWidth::Bits64
    } else {
        HexWidth::Bits32
    };

    pub const fn bits(self) -> u32 {
        match self {
            HexWidth::Bits32 => 32,
            HexWidth::Bits64 => 64,
        }
    }

    /// Number of digits produced at this width
    pub const fn digits(self) -> usize {
        (self.bits() / 4) as usize
    }
}

/// Rendered hex digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexText {
    text: String<MAX_HEX_DIGITS>,
}

impl HexText {
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl core::fmt::Display for HexText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `value` at the given width
///
/// At [`HexWidth::Bits32`] only the low 32 bits of `value` are rendered.
pub fn encode_hex(value: u64, width: HexWidth) -> HexText {
    let mut text = String::new();
    for i in (0..width.digits()).rev() {
        let nibble = ((value >> (i * 4)) & 0xF) as usize;
        // Capacity covers the widest rendering
        let _ = text.push(DIGITS[nibble] as char);
    }
    HexText { text }
}

/// Render a 32-bit value as 8 digits
pub fn encode_u32(value: u32) -> HexText {
    encode_hex(u64::from(value), HexWidth::Bits32)
}

/// Render a 64-bit value as 16 digits
pub fn encode_u64(value: u64) -> HexText {
    encode_hex(value, HexWidth::Bits64)
}

/// Render an address at the target's native width
pub fn encode_usize(value: usize) -> HexText {
    encode_hex(value as u64, HexWidth::NATIVE)
}
