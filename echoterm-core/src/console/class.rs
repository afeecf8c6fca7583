//! Character classification
//!
//! Every byte value maps to exactly one class. The quit check runs first:
//! `q` and `Q` sit inside the printable range and must never be echoed.

/// Lowest printable ASCII byte (space)
pub const PRINTABLE_LOW: u8 = 0x20;

/// Highest printable ASCII byte (`~`)
pub const PRINTABLE_HIGH: u8 = 0x7E;

pub const CR: u8 = 0x0D;
pub const LF: u8 = 0x0A;
pub const BS: u8 = 0x08;
pub const TAB: u8 = 0x09;

/// Class of a received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharClass {
    CarriageReturn,
    LineFeed,
    Backspace,
    Tab,
    /// 0x20..=0x7E other than the quit keys
    Printable,
    /// Anything else
    NonPrintable,
    /// `q` or `Q`
    Quit,
}

impl CharClass {
    /// Classify a byte
    pub const fn of(byte: u8) -> Self {
        match byte {
            b'q' | b'Q' => CharClass::Quit,
            CR => CharClass::CarriageReturn,
            LF => CharClass::LineFeed,
            BS => CharClass::Backspace,
            TAB => CharClass::Tab,
            PRINTABLE_LOW..=PRINTABLE_HIGH => CharClass::Printable,
            _ => CharClass::NonPrintable,
        }
    }

    /// Line-editing control classes that get a transformed response
    pub const fn is_control(self) -> bool {
        matches!(
            self,
            CharClass::CarriageReturn | CharClass::LineFeed | CharClass::Backspace | CharClass::Tab
        )
    }
}

impl From<u8> for CharClass {
    fn from(byte: u8) -> Self {
        CharClass::of(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys_take_precedence() {
        assert_eq!(CharClass::of(b'q'), CharClass::Quit);
        assert_eq!(CharClass::of(b'Q'), CharClass::Quit);
        // Neighbours stay printable
        assert_eq!(CharClass::of(b'p'), CharClass::Printable);
        assert_eq!(CharClass::of(b'R'), CharClass::Printable);
    }

    #[test]
    fn test_control_bytes() {
        assert_eq!(CharClass::of(0x0D), CharClass::CarriageReturn);
        assert_eq!(CharClass::of(0x0A), CharClass::LineFeed);
        assert_eq!(CharClass::of(0x08), CharClass::Backspace);
        assert_eq!(CharClass::of(0x09), CharClass::Tab);
    }

    #[test]
    fn test_printable_range_bounds() {
        assert_eq!(CharClass::of(0x1F), CharClass::NonPrintable);
        assert_eq!(CharClass::of(0x20), CharClass::Printable);
        assert_eq!(CharClass::of(0x7E), CharClass::Printable);
        assert_eq!(CharClass::of(0x7F), CharClass::NonPrintable);
        assert_eq!(CharClass::of(0xFF), CharClass::NonPrintable);
    }

    #[test]
    fn test_classification_is_total() {
        let mut counts = [0usize; 7];
        for byte in 0..=u8::MAX {
            let slot = match CharClass::from(byte) {
                CharClass::CarriageReturn => 0,
                CharClass::LineFeed => 1,
                CharClass::Backspace => 2,
                CharClass::Tab => 3,
                CharClass::Printable => 4,
                CharClass::NonPrintable => 5,
                CharClass::Quit => 6,
            };
            counts[slot] += 1;
        }

        assert_eq!(&counts[..4], &[1usize; 4]);
        // 95 printable bytes minus the two quit keys
        assert_eq!(counts[4], 93);
        assert_eq!(counts[5], 256 - 95 - 4);
        assert_eq!(counts[6], 2);
        assert_eq!(counts.iter().sum::<usize>(), 256);
    }

    #[test]
    fn test_is_control() {
        assert!(CharClass::Tab.is_control());
        assert!(CharClass::CarriageReturn.is_control());
        assert!(!CharClass::Printable.is_control());
        assert!(!CharClass::Quit.is_control());
    }
}
