//! Mock transport shared by the unit tests

use echoterm_hal::Transport;
use heapless::{Deque, Vec};

/// Error raised by [`MockTransport`] once its send budget runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDown;

/// Scripted transport: queued input, recorded output
pub struct MockTransport {
    input: Deque<u8, 64>,
    pub output: Vec<u8, 1024>,
    pub polls: usize,
    pub receives: usize,
    /// Polls that report no input before the queued input becomes visible
    pub idle_polls: usize,
    /// Number of send calls allowed before every send fails
    pub send_budget: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            input: Deque::new(),
            output: Vec::new(),
            polls: 0,
            receives: 0,
            idle_polls: 0,
            send_budget: None,
        }
    }

    pub fn with_input(input: &[u8]) -> Self {
        let mut transport = Self::new();
        transport.queue(input);
        transport
    }

    pub fn queue(&mut self, input: &[u8]) {
        for &byte in input {
            self.input.push_back(byte).unwrap();
        }
    }

    pub fn pending(&self) -> usize {
        self.input.len()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    fn charge_send(&mut self) -> Result<(), LineDown> {
        match self.send_budget {
            Some(0) => Err(LineDown),
            Some(ref mut left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Transport for MockTransport {
    type Error = LineDown;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.charge_send()?;
        self.output.push(byte).unwrap();
        Ok(())
    }

    fn recv_byte(&mut self) -> Result<u8, Self::Error> {
        self.receives += 1;
        Ok(self.input.pop_front().unwrap())
    }

    fn send_text(&mut self, text: &[u8]) -> Result<(), Self::Error> {
        self.charge_send()?;
        self.output.extend_from_slice(text).unwrap();
        Ok(())
    }

    fn available(&mut self) -> Result<bool, Self::Error> {
        self.polls += 1;
        if self.idle_polls > 0 {
            self.idle_polls -= 1;
            return Ok(false);
        }
        Ok(!self.input.is_empty())
    }
}
