//! Switch numbers and multiplexer select codes.
//!
//! Users count switches from 1; the multiplexer address lines count
//! channels from 0. A [`Switch`] is always in `1..=16` and its
//! [`SelectCode`] is `switch - 1`, which always fits in four bits.

use core::fmt;

use crate::bus::{ADDRESS_LINES, CODE_MASK};
use crate::error::OutOfRange;

/// A validated switch number in `Switch::MIN..=Switch::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Switch(u8);

impl Switch {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 16;

    pub const fn new(n: u32) -> Result<Self, OutOfRange> {
        if n >= Self::MIN as u32 && n <= Self::MAX as u32 {
            Ok(Self(n as u8))
        } else {
            Err(OutOfRange(n))
        }
    }

    pub const fn from_code(code: SelectCode) -> Self {
        Self(code.0 + 1)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn code(self) -> SelectCode {
        SelectCode((self.0 - 1) & CODE_MASK)
    }
}

impl TryFrom<u32> for Switch {
    type Error = OutOfRange;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 4-bit channel address driven onto A3..A0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectCode(u8);

impl SelectCode {
    /// All address lines low (channel 0).
    pub const ZERO: Self = Self(0);

    /// Truncates to the low four bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & CODE_MASK)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Level of address line `line` (0 = A0), as 0 or 1.
    #[inline]
    pub const fn bit(self, line: usize) -> u8 {
        (self.0 >> line) & 1
    }

    #[inline]
    pub const fn is_high(self, line: usize) -> bool {
        self.bit(line) == 1
    }
}

// MSB first, matching the A3A2A1A0 label
impl fmt::Display for SelectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in (0..ADDRESS_LINES).rev() {
            write!(f, "{}", self.bit(line))?;
        }
        Ok(())
    }
}
