//! Events that drive session state transitions

use super::class::CharClass;

/// Events that can trigger session state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent {
    /// Start banner has been transmitted
    BannerSent,
    /// Availability poll found no pending input
    NoInput,
    /// A byte was received and classified
    Received(CharClass),
}

impl SessionEvent {
    /// Check if this event carries a received byte
    pub fn is_input(&self) -> bool {
        matches!(self, SessionEvent::Received(_))
    }
}
