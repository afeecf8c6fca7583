//! UART configuration for RP2040
//!
//! RP2040 has two PL011 UARTs. The console runs on UART0 (GPIO0 TX,
//! GPIO1 RX); the line settings come from `echoterm_hal::UartConfig`.

use echoterm_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use embassy_rp::uart;

/// Convert line settings into an `embassy-rp` UART configuration
pub fn to_rp_config(config: &UartConfig) -> uart::Config {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    rp
}
