//! Echoterm - Serial Echo Console Firmware
//!
//! Boots an RP2040, reports the `.bss` region on UART0, then runs the
//! interactive echo session until `q` is pressed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use echoterm_core::{report, EchoSession};
use echoterm_hal_rp2040::memory::bss_region;
use echoterm_hal_rp2040::uart::to_rp_config;
use echoterm_hal_rp2040::{IoTransport, Transport};

mod config;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Echoterm firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART: GPIO0 TX, GPIO1 RX
    let uart_config = to_rp_config(&config::UART);
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    info!("UART0 initialized at {} baud", config::UART.baudrate);

    let mut console = IoTransport::new(uart);
    match run_console(&mut console) {
        Ok(()) => info!("Echo session finished"),
        Err(e) => error!("Console transport error: {:?}", e),
    }

    loop {
        cortex_m::asm::wfe();
    }
}

/// Region report followed by the echo session
fn run_console<T: Transport>(console: &mut T) -> Result<(), T::Error> {
    console.init()?;

    let bss = bss_region();
    debug!("BSS {=usize:#x}..{=usize:#x}", bss.start(), bss.end());
    report::send_region(console, "BSS", &bss)?;

    // SAFETY: .bss is RAM owned by this program; it is only read here.
    let sample = unsafe { bss.bytes(config::DUMP_BYTES) };
    report::send_dump(console, sample)?;

    let mut session = EchoSession::new(&config::CONSOLE);
    session.run(console)
}
