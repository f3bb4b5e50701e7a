// USB-Serial-JTAG console
//
// The ESP32-C3's built-in USB CDC-ACM endpoint; no UART pins, no baud
// rate. RX is polled from the main loop (64-byte FIFO, plenty at typing
// speed). TX goes through esp-hal's blocking writer.
// The SOF frame counter is read straight from the peripheral so the
// main loop can tell whether a host is on the other end.

use core::fmt;

use esp_hal::Blocking;
use esp_hal::usb_serial_jtag::{UsbSerialJtag, UsbSerialJtagRx, UsbSerialJtagTx};

const USB_SERIAL_JTAG_BASE: u32 = 0x6004_3000;
const FRAM_NUM_OFFSET: u32 = 0x24; // bits [10:0] = last SOF frame index

pub struct UsbConsole {
    rx: UsbSerialJtagRx<'static, Blocking>,
    tx: UsbSerialJtagTx<'static, Blocking>,
}

impl UsbConsole {
    pub fn new(usb: UsbSerialJtag<'static, Blocking>) -> Self {
        let (rx, tx) = usb.split();
        Self { rx, tx }
    }

    // non-blocking: returns bytes copied out of the RX FIFO (0 if empty)
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.rx.drain_rx_fifo(buf)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), fmt::Error> {
        self.tx.write(bytes).map_err(|_| fmt::Error)
    }

    // push a partially filled TX packet out to the host
    pub fn flush(&mut self) -> Result<(), fmt::Error> {
        self.tx.flush_tx().map_err(|_| fmt::Error)
    }

    pub fn frame_number(&self) -> u16 {
        let reg = (USB_SERIAL_JTAG_BASE + FRAM_NUM_OFFSET) as *const u32;
        // Safety: read-only status register at a fixed MMIO address; reading
        // it doesn't disturb the FIFOs esp-hal drives through `self.rx`/`self.tx`.
        (unsafe { reg.read_volatile() } & mux_core::link::FRAME_MASK as u32) as u16
    }
}

impl fmt::Write for UsbConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes())
    }
}
