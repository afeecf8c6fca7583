//! Echo session controller
//!
//! Everything the session transmits is a function of its current state
//! and the byte just received.

use echoterm_hal::Transport;

use super::class::CharClass;
use super::events::SessionEvent;
use super::messages::{CRLF, ECHO_PROMPT, EXIT_BANNER, HEX_LABEL};
use super::response::Response;
use crate::config::ConsoleConfig;
use crate::hex::encode_u32;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Banner not yet sent
    Init,
    /// Polling for input and answering each byte
    Echoing,
    /// Quit key received; control returns to the caller
    Exiting,
}

impl SessionState {
    /// Check if input is accepted in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, SessionState::Echoing)
    }

    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Exiting)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            (Init, BannerSent) => Echoing,

            (Echoing, Received(CharClass::Quit)) => Exiting,
            (Echoing, Received(_)) => Echoing,
            (Echoing, NoInput) => Echoing,

            // Default: stay in current state
            _ => self,
        }
    }
}

/// Interactive echo session
///
/// Single owner of its state. Drive it with [`EchoSession::run`], or call
/// [`EchoSession::start`] once and then [`EchoSession::poll`] from an
/// existing loop.
#[derive(Debug)]
pub struct EchoSession<'a> {
    config: &'a ConsoleConfig,
    state: SessionState,
}

impl<'a> EchoSession<'a> {
    pub fn new(config: &'a ConsoleConfig) -> Self {
        Self {
            config,
            state: SessionState::Init,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the quit key has been received
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Send the start banner and begin accepting input
    ///
    /// Does nothing unless the session is still in [`SessionState::Init`].
    pub fn start<T: Transport>(&mut self, transport: &mut T) -> Result<(), T::Error> {
        if self.state != SessionState::Init {
            return Ok(());
        }

        transport.send_text(self.config.program_name.as_bytes())?;
        transport.send_text(CRLF)?;
        transport.send_text(self.config.welcome.as_bytes())?;
        transport.send_text(CRLF)?;
        transport.send_text(HEX_LABEL)?;
        transport.send_text(encode_u32(self.config.diagnostic_value).as_bytes())?;
        transport.send_text(CRLF)?;
        transport.send_text(ECHO_PROMPT)?;

        self.state = self.state.transition(SessionEvent::BannerSent);
        Ok(())
    }

    /// Check for input once and answer it
    ///
    /// Returns the class of the byte handled, or `None` when nothing was
    /// pending. Never blocks when the line is idle, and does not touch the
    /// transport outside [`SessionState::Echoing`].
    pub fn poll<T: Transport>(&mut self, transport: &mut T) -> Result<Option<CharClass>, T::Error> {
        if !self.state.accepts_input() {
            return Ok(None);
        }

        if !transport.available()? {
            self.state = self.state.transition(SessionEvent::NoInput);
            return Ok(None);
        }

        let byte = transport.recv_byte()?;
        self.handle_byte(byte, transport).map(Some)
    }

    /// Classify one received byte and send its response
    ///
    /// Outside [`SessionState::Echoing`] the byte is classified but nothing
    /// is sent and the state is unchanged.
    pub fn handle_byte<T: Transport>(&mut self, byte: u8, transport: &mut T) -> Result<CharClass, T::Error> {
        let class = CharClass::of(byte);
        if !self.state.accepts_input() {
            return Ok(class);
        }

        match Response::for_byte(byte) {
            Response::Echo(echo) => transport.send_byte(echo)?,
            Response::Text(text) => transport.send_text(text)?,
            Response::Exit => transport.send_text(EXIT_BANNER)?,
        }

        self.state = self.state.transition(SessionEvent::Received(class));
        Ok(class)
    }

    /// Run the whole session: banner, echo loop, exit on quit
    pub fn run<T: Transport>(&mut self, transport: &mut T) -> Result<(), T::Error> {
        self.start(transport)?;
        while !self.is_finished() {
            self.poll(transport)?;
        }
        Ok(())
    }
}
