//! Multiplexer address lines.
//!
//! A 16-channel mux is addressed by four select inputs S0..S3 (labelled
//! A0..A3 on the console). [`AddressBus`] is the seam between the session
//! logic and whatever drives those lines: individual `OutputPin`s via
//! [`PinBus`], or a single masked register write on the target.

use embedded_hal::digital::{OutputPin, PinState};

use crate::switch::SelectCode;

/// Number of select lines on the multiplexer.
pub const ADDRESS_LINES: usize = 4;

/// Bits of a select code that map onto address lines.
pub const CODE_MASK: u8 = 0x0F;

pub trait AddressBus {
    type Error;

    /// Drive all address lines to `code` (bit n on line An).
    fn write_code(&mut self, code: SelectCode) -> Result<(), Self::Error>;

    /// All lines low.
    fn reset(&mut self) -> Result<(), Self::Error> {
        self.write_code(SelectCode::ZERO)
    }
}

/// Output-register mask covering `pins` (GPIO numbers, A0..A3 order).
pub const fn pin_mask(pins: &[u8; ADDRESS_LINES]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < ADDRESS_LINES {
        mask |= 1u32 << pins[i];
        i += 1;
    }
    mask
}

/// Place code bit n on GPIO `pins[n]` of a 32-bit output register.
pub fn spread_code(code: SelectCode, pins: &[u8; ADDRESS_LINES]) -> u32 {
    pins.iter()
        .enumerate()
        .filter(|&(line, _)| code.is_high(line))
        .fold(0, |acc, (_, &pin)| acc | (1u32 << pin))
}

/// Inverse of [`spread_code`]: read the code back out of a register value.
pub fn gather_code(levels: u32, pins: &[u8; ADDRESS_LINES]) -> SelectCode {
    let bits = pins
        .iter()
        .enumerate()
        .fold(0u8, |acc, (line, &pin)| acc | ((((levels >> pin) & 1) as u8) << line));
    SelectCode::from_bits(bits)
}

impl<B: AddressBus + ?Sized> AddressBus for &mut B {
    type Error = B::Error;

    fn write_code(&mut self, code: SelectCode) -> Result<(), Self::Error> {
        (**self).write_code(code)
    }
}

/// Address bus built from four independent output pins, `[A0, A1, A2, A3]`.
///
/// Lines are updated one after another, so the mux briefly sees
/// intermediate codes. Use a masked register write where that matters.
pub struct PinBus<P> {
    lines: [P; ADDRESS_LINES],
}

impl<P: OutputPin> PinBus<P> {
    pub fn new(lines: [P; ADDRESS_LINES]) -> Self {
        Self { lines }
    }

    pub fn release(self) -> [P; ADDRESS_LINES] {
        self.lines
    }
}

impl<P: OutputPin> AddressBus for PinBus<P> {
    type Error = P::Error;

    fn write_code(&mut self, code: SelectCode) -> Result<(), Self::Error> {
        for (line, pin) in self.lines.iter_mut().enumerate() {
            pin.set_state(PinState::from(code.is_high(line)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }
    }

    fn levels(bus: PinBus<FakePin>) -> [bool; ADDRESS_LINES] {
        bus.release().map(|p| p.high)
    }

    #[test]
    fn spread_follows_pin_map() {
        let contiguous = [0, 1, 2, 3];
        assert_eq!(pin_mask(&contiguous), 0x0F);
        assert_eq!(spread_code(SelectCode::from_bits(0b0101), &contiguous), 0b0101);

        // scattered and out-of-order pins
        let scattered = [7, 4, 10, 21];
        assert_eq!(pin_mask(&scattered), (1 << 4) | (1 << 7) | (1 << 10) | (1 << 21));
        assert_eq!(spread_code(SelectCode::from_bits(0b0001), &scattered), 1 << 7);
        assert_eq!(spread_code(SelectCode::from_bits(0b1000), &scattered), 1 << 21);
        assert_eq!(
            spread_code(SelectCode::from_bits(0b1111), &scattered),
            pin_mask(&scattered)
        );
        assert_eq!(spread_code(SelectCode::ZERO, &scattered), 0);
    }

    #[test]
    fn gather_inverts_spread_and_ignores_other_pins() {
        let pins = [7, 4, 10, 21];
        for bits in 0..=CODE_MASK {
            let code = SelectCode::from_bits(bits);
            let noise = !pin_mask(&pins);
            assert_eq!(gather_code(spread_code(code, &pins) | noise, &pins), code);
        }
    }

    #[test]
    fn writes_each_line_from_its_bit() {
        let mut bus = PinBus::new(Default::default());
        bus.write_code(SelectCode::from_bits(0b0110)).unwrap();
        assert_eq!(levels(bus), [false, true, true, false]);
    }

    #[test]
    fn reset_drives_all_low() {
        let mut bus = PinBus::new(Default::default());
        bus.write_code(SelectCode::from_bits(0b1111)).unwrap();
        bus.reset().unwrap();
        let pins: [FakePin; ADDRESS_LINES] = bus.release();
        assert!(pins.iter().all(|p| !p.high));
        assert!(pins.iter().all(|p| p.writes == 2));
    }
}
