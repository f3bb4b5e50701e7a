// Decimal entry accumulator for the serial prompt
//
// One byte in, one decision out. Digits accumulate into a u32 and are
// echoed; CR or LF submits; BS/DEL drops the last digit; everything
// else is ignored silently. No line buffer: the integer is the state.
// A LF directly after CR is swallowed so CRLF terminals submit once.
// At most MAX_DIGITS are taken per line, so the u32 never overflows and
// every erase is exact; further digits are dropped without echo.

pub const ASCII_BACKSPACE: u8 = 0x08;
pub const ASCII_DEL: u8 = 0x7F;
pub const ASCII_CR: u8 = b'\r';
pub const ASCII_LF: u8 = b'\n';

/// Longest entry accepted; 999_999_999 fits a u32.
pub const MAX_DIGITS: u8 = 9;

/// What a submitted line contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Enter pressed without any digits
    Empty,
    /// Accumulated decimal value (at most `MAX_DIGITS` digits)
    Value(u32),
}

/// Result of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Digit accepted; echo it back
    Echo(u8),
    /// Last digit removed; rub it out on the terminal
    Erase,
    /// Line terminated
    Submit(Entry),
    /// Byte had no effect
    Ignored,
}

#[derive(Debug, Default)]
pub struct LineReader {
    value: u32,
    digits: u8,
    after_cr: bool,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            value: 0,
            digits: 0,
            after_cr: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> Input {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == ASCII_CR);

        match byte {
            ASCII_LF if after_cr => Input::Ignored,
            ASCII_CR | ASCII_LF => Input::Submit(self.take()),
            b'0'..=b'9' if self.digits < MAX_DIGITS => {
                self.value = self.value * 10 + (byte - b'0') as u32;
                self.digits += 1;
                Input::Echo(byte)
            }
            ASCII_BACKSPACE | ASCII_DEL if self.digits > 0 => {
                self.digits -= 1;
                self.value /= 10;
                Input::Erase
            }
            _ => Input::Ignored,
        }
    }

    /// Ends the current line and returns what it held.
    pub fn take(&mut self) -> Entry {
        let entry = if self.digits > 0 {
            Entry::Value(self.value)
        } else {
            Entry::Empty
        };
        self.value = 0;
        self.digits = 0;
        entry
    }

    /// Drop any partially typed entry.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn has_digits(&self) -> bool {
        self.digits > 0
    }

    #[inline]
    pub fn pending(&self) -> u32 {
        self.value
    }
}
