//! ESP32-C3 board support for the multiplexer selector.
//!
//! Maps the physical hardware to named subsystems so the rest of the
//! firmware never handles GPIO numbers or peripheral singletons.
//! Pin assignments live in [`pins`].

pub mod pins;
pub mod raw_gpio;

pub use raw_gpio::MaskedOutputs;

use esp_hal::{
    gpio::{Level, Output, OutputConfig},
    peripherals::Peripherals,
    usb_serial_jtag::UsbSerialJtag,
};

use crate::drivers::usb_console::UsbConsole;

/// Complete board hardware, ready for the session.
pub struct Board {
    pub mux: MaskedOutputs,
    pub console: UsbConsole,
}

impl Board {
    /// Takes the peripherals it needs; timers stay with the caller.
    pub fn init(p: Peripherals) -> (Self, esp_hal::peripherals::TIMG0<'static>) {
        // address lines come up low (channel 0) before anything else runs
        let mux = MaskedOutputs::new([
            Output::new(p.GPIO0, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO1, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO2, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO3, Level::Low, OutputConfig::default()),
        ]);

        let console = UsbConsole::new(UsbSerialJtag::new(p.USB_DEVICE));

        (Board { mux, console }, p.TIMG0)
    }
}
