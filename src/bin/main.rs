// muxctl entry point and main loop
//
// Boot sequence: logger -> hardware (address lines low) -> 10ms timer
// Outer loop: wait for a USB host -> banner -> serve until it goes away
// Serve loop: WFI until tick -> drain RX FIFO into the session -> sample
// the SOF counter for link loss
//
// The last selected code stays latched on the pins across disconnects.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use log::{debug, error, info};

use core::cell::RefCell;
use critical_section::Mutex;

use mux_core::{AddressBus, LinkEvent, LinkMonitor, Session};
use muxctl::board::Board;
use muxctl::drivers::usb_console::UsbConsole;
use muxctl::kernel::wake::{signal_timer, uptime_ms};
use muxctl::kernel::{TICK_MS, wait_tick};

esp_bootloader_esp_idf::esp_app_desc!();

// one USB full-speed bulk packet
const RX_CHUNK: usize = 64;

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
    });
    signal_timer();
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let (board, timg0) = Board::init(peripherals);
    let Board { mux, mut console } = board;

    let mut session = Session::new(mux);
    if let Err(e) = session.init() {
        error!("mux init: {}", e);
    }
    info!("mux lines initialized.");

    let timg0 = TimerGroup::new(timg0);
    let mut timer0 = PeriodicTimer::new(timg0.timer0);
    critical_section::with(|cs| {
        timer0.set_interrupt_handler(timer0_handler);
        // no tick means wait_tick() sleeps forever; let esp-backtrace report it
        timer0.start(Duration::from_millis(TICK_MS as u64)).unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    info!("timer initialized.");

    let mut link = LinkMonitor::new();
    let mut rx = [0u8; RX_CHUNK];

    loop {
        info!("waiting for USB host...");
        wait_for_host(&mut link, &console);
        debug!("usb: host connected at {}ms", uptime_ms());

        if let Err(e) = session.greet(&mut console).and_then(|()| flush(&mut console)) {
            error!("console: {}", e);
        }

        serve(&mut session, &mut console, &mut link, &mut rx);

        session.reset_line();
        debug!(
            "usb: host gone at {}ms, latched switch {:?} (A3A2A1A0 = {})",
            uptime_ms(),
            session.selected().map(|s| s.get()),
            session.bus().read_back()
        );
    }
}

// Block (in WFI) until the SOF counter shows an enumerated host.
fn wait_for_host(link: &mut LinkMonitor, console: &UsbConsole) {
    loop {
        wait_tick();
        if link.sample(console.frame_number()) == Some(LinkEvent::Connected) {
            return;
        }
    }
}

// Feed console input to the session until the link drops.
fn serve<B>(
    session: &mut Session<B>,
    console: &mut UsbConsole,
    link: &mut LinkMonitor,
    rx: &mut [u8],
) where
    B: AddressBus,
    B::Error: core::fmt::Debug,
{
    loop {
        wait_tick();

        let n = console.read(rx);
        for &byte in &rx[..n] {
            if let Err(e) = session.feed(byte, console) {
                error!("session: {}", e);
            }
        }
        if n > 0 {
            if let Err(e) = console.flush() {
                error!("console flush: {}", e);
            }
        }

        if link.sample(console.frame_number()) == Some(LinkEvent::Disconnected) {
            return;
        }
    }
}

fn flush<E>(console: &mut UsbConsole) -> Result<(), mux_core::Error<E>> {
    console.flush()?;
    Ok(())
}
