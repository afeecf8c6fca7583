//! Property tests for the hex encoder and the echo session

use std::collections::VecDeque;
use std::convert::Infallible;

use echoterm_core::console::messages::{EXIT_BANNER, NON_PRINTABLE_NOTICE};
use echoterm_core::hex::{encode_u32, encode_u64};
use echoterm_core::{CharClass, ConsoleConfig, EchoSession, SessionState};
use echoterm_hal::Transport;
use proptest::prelude::*;

/// Host-side transport over std collections
#[derive(Default)]
struct HostTransport {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl HostTransport {
    fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }
}

impl Transport for HostTransport {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.output.push(byte);
        Ok(())
    }

    fn recv_byte(&mut self) -> Result<u8, Self::Error> {
        Ok(self.input.pop_front().expect("recv without available"))
    }

    fn available(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.input.is_empty())
    }
}

/// Session output for `input`, banner excluded
fn echo_output(input: &[u8]) -> (Vec<u8>, SessionState) {
    let config = ConsoleConfig::default();
    let mut transport = HostTransport::with_input(input);
    let mut session = EchoSession::new(&config);

    session.start(&mut transport).unwrap();
    transport.output.clear();
    while !session.is_finished() && !transport.input.is_empty() {
        session.poll(&mut transport).unwrap();
    }
    (transport.output, session.state())
}

fn printable_non_quit() -> impl Strategy<Value = u8> {
    (0x20u8..=0x7E).prop_filter("quit key", |b| *b != b'q' && *b != b'Q')
}

fn non_printable() -> impl Strategy<Value = u8> {
    prop_oneof![0x00u8..=0x07, 0x0Bu8..=0x0C, 0x0Eu8..=0x1F, 0x7Fu8..=0xFF]
}

proptest! {
    #[test]
    fn hex_u32_round_trip(v in any::<u32>()) {
        let text = encode_u32(v);
        prop_assert_eq!(text.len(), 8);
        prop_assert_eq!(u32::from_str_radix(text.as_str(), 16).unwrap(), v);
    }

    #[test]
    fn hex_u64_round_trip(v in any::<u64>()) {
        let text = encode_u64(v);
        prop_assert_eq!(text.len(), 16);
        prop_assert_eq!(u64::from_str_radix(text.as_str(), 16).unwrap(), v);
    }

    #[test]
    fn hex_digits_are_uppercase(v in any::<u64>()) {
        let text = encode_u64(v);
        prop_assert!(text.as_bytes().iter().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')));
    }

    #[test]
    fn printable_bytes_echo_unchanged(byte in printable_non_quit()) {
        let (output, state) = echo_output(&[byte]);
        prop_assert_eq!(output, vec![byte]);
        prop_assert_eq!(state, SessionState::Echoing);
    }

    #[test]
    fn non_printable_bytes_get_notice(byte in non_printable()) {
        prop_assert_eq!(CharClass::of(byte), CharClass::NonPrintable);
        let (output, _) = echo_output(&[byte]);
        prop_assert_eq!(output, NON_PRINTABLE_NOTICE.to_vec());
    }

    #[test]
    fn nothing_follows_quit(
        before in proptest::collection::vec(printable_non_quit(), 0..16),
        quit in prop_oneof![Just(b'q'), Just(b'Q')],
        after in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut input = before.clone();
        input.push(quit);
        input.extend_from_slice(&after);

        let (output, state) = echo_output(&input);

        let mut expected = before;
        expected.extend_from_slice(EXIT_BANNER);
        prop_assert_eq!(output, expected);
        prop_assert_eq!(state, SessionState::Exiting);
    }
}

#[test]
fn scenario_banner_then_echo_then_quit() {
    let config = ConsoleConfig::default();
    let mut transport = HostTransport::with_input(b"A\rq");
    let mut session = EchoSession::new(&config);

    session.run(&mut transport).unwrap();

    let text = String::from_utf8(transport.output).unwrap();
    let (banner, echoed) = text.split_at(text.find("A\r\n").unwrap());
    assert!(banner.contains("Hello"));
    assert!(banner.contains("DEADBEEF"));
    assert_eq!(echoed, "A\r\n\r\nExiting echo mode.\r\n");
    assert_eq!(session.state(), SessionState::Exiting);
}
