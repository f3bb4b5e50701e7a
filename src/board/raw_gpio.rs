//! Masked GPIO output for the multiplexer address lines.
//!
//! esp-hal drives pins one at a time, which lets the mux see up to three
//! intermediate channels while a new code settles. The ESP32-C3 keeps all
//! GPIO output levels in one register, so the four lines are switched
//! together with a single read-modify-write of GPIO_OUT. esp-hal still
//! does the IO_MUX/output-enable setup; we keep its `Output` handles so
//! nothing else can claim the pins.

use core::convert::Infallible;

use esp_hal::gpio::Output;
use mux_core::bus::{ADDRESS_LINES, AddressBus, gather_code, spread_code};
use mux_core::SelectCode;

use crate::board::pins::{MUX_LINES, MUX_MASK};

const GPIO_OUT: u32 = 0x6000_4004; // GPIO output levels, one bit per pin

pub struct MaskedOutputs {
    _pins: [Output<'static>; ADDRESS_LINES],
}

impl MaskedOutputs {
    // `pins` must be the outputs for MUX_LINES, in A0..A3 order.
    pub fn new(pins: [Output<'static>; ADDRESS_LINES]) -> Self {
        Self { _pins: pins }
    }

    // current code as seen on the output register
    pub fn read_back(&self) -> SelectCode {
        // Safety: GPIO_OUT is a fixed, always-mapped MMIO register; reading it
        // has no side effects.
        let out = unsafe { (GPIO_OUT as *const u32).read_volatile() };
        gather_code(out, &MUX_LINES)
    }
}

impl AddressBus for MaskedOutputs {
    type Error = Infallible;

    fn write_code(&mut self, code: SelectCode) -> Result<(), Self::Error> {
        let levels = spread_code(code, &MUX_LINES);
        // cs: an ISR touching another pin between read and write would be lost
        // Safety: fixed MMIO address; the MUX_LINES pins are owned through
        // `_pins`, and bits outside MUX_MASK are written back unchanged.
        critical_section::with(|_| unsafe {
            let reg = GPIO_OUT as *mut u32;
            let out = reg.read_volatile();
            reg.write_volatile((out & !MUX_MASK) | (levels & MUX_MASK));
        });
        Ok(())
    }
}
