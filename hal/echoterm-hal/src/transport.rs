//! Serial transport abstraction
//!
//! The console core performs every input/output operation through
//! [`Transport`]. Implementations own the peripheral; the core never sees
//! clocks, FIFOs, or pins.

use embedded_io::{Read, ReadReady, Write};

/// Byte-oriented serial transport
///
/// All operations except [`Transport::available`] may block. `available`
/// must return immediately, it is the only suspension point of the echo
/// loop.
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// One-time setup before a session begins
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Transmit one byte, blocking until accepted
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Receive one byte, blocking until one arrives
    ///
    /// The core only calls this after [`Transport::available`] returned `true`.
    fn recv_byte(&mut self) -> Result<u8, Self::Error>;

    /// Transmit a sequence of bytes as a unit
    fn send_text(&mut self, text: &[u8]) -> Result<(), Self::Error> {
        for &byte in text {
            self.send_byte(byte)?;
        }
        Ok(())
    }

    /// Non-blocking check for at least one pending input byte
    fn available(&mut self) -> Result<bool, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::send_byte(self, byte)
    }

    fn recv_byte(&mut self) -> Result<u8, Self::Error> {
        T::recv_byte(self)
    }

    fn send_text(&mut self, text: &[u8]) -> Result<(), Self::Error> {
        T::send_text(self, text)
    }

    fn available(&mut self) -> Result<bool, Self::Error> {
        T::available(self)
    }
}

/// Transport over an `embedded-io` serial device
///
/// Works with any blocking reader/writer that can also report read
/// readiness, e.g. a buffered UART whose RX ring is filled by interrupts.
pub struct IoTransport<T> {
    io: T,
}

impl<T> IoTransport<T> {
    /// Wrap a serial device
    pub fn new(io: T) -> Self {
        Self { io }
    }

    /// Borrow the underlying device
    pub fn inner(&self) -> &T {
        &self.io
    }

    /// Release the underlying device
    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T: Read + Write + ReadReady> Transport for IoTransport<T> {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        // Peripheral setup happens when the device is constructed; only
        // drain anything queued before the session takes over the line.
        self.io.flush()
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.io.write_all(&[byte])
    }

    fn recv_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        loop {
            if self.io.read(&mut buf)? == 1 {
                return Ok(buf[0]);
            }
        }
    }

    fn send_text(&mut self, text: &[u8]) -> Result<(), Self::Error> {
        self.io.write_all(text)
    }

    fn available(&mut self) -> Result<bool, Self::Error> {
        self.io.read_ready()
    }
}
