//! Interactive selector session.
//!
//! A [`Session`] is the body of the console loop: the firmware feeds it
//! every byte read from the host and hands it a writer for replies. It
//! owns the address bus, so the only way the select lines change is a
//! complete, in-range entry.

use core::fmt::Write;

use log::debug;

use crate::bus::AddressBus;
use crate::console;
use crate::error::Error;
use crate::line::{Entry, Input, LineReader};
use crate::switch::Switch;

/// What a submitted line did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Select code written to the bus
    Selected(Switch),
    /// Number outside `1..=16`; bus untouched
    Rejected(u32),
    /// Enter without digits
    Empty,
}

pub struct Session<B> {
    bus: B,
    reader: LineReader,
    selected: Option<Switch>,
}

impl<B: AddressBus> Session<B> {
    /// Takes ownership of the bus. Call [`Session::init`] before use.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            reader: LineReader::new(),
            selected: None,
        }
    }

    /// Drive every address line low.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        self.bus.reset().map_err(Error::Bus)?;
        self.selected = None;
        Ok(())
    }

    /// Banner and first prompt, once per host connection.
    pub fn greet<W: Write>(&mut self, w: &mut W) -> Result<(), Error<B::Error>> {
        console::banner(w)?;
        Ok(())
    }

    /// Process one byte from the console.
    ///
    /// Returns `Some` only when the byte terminated a line.
    pub fn feed<W: Write>(
        &mut self,
        byte: u8,
        w: &mut W,
    ) -> Result<Option<Outcome>, Error<B::Error>> {
        match self.reader.feed(byte) {
            Input::Echo(b) => {
                console::echo(w, b)?;
                Ok(None)
            }
            Input::Erase => {
                console::erase(w)?;
                Ok(None)
            }
            Input::Ignored => Ok(None),
            Input::Submit(entry) => {
                console::newline(w)?;
                let outcome = self.submit(entry, w)?;
                console::newline(w)?;
                console::prompt(w)?;
                Ok(Some(outcome))
            }
        }
    }

    /// Feed a whole buffer; stops at the first error.
    pub fn feed_all<W: Write>(&mut self, bytes: &[u8], w: &mut W) -> Result<(), Error<B::Error>> {
        for &b in bytes {
            self.feed(b, w)?;
        }
        Ok(())
    }

    fn submit<W: Write>(&mut self, entry: Entry, w: &mut W) -> Result<Outcome, Error<B::Error>> {
        let Entry::Value(n) = entry else {
            return Ok(Outcome::Empty);
        };

        match Switch::new(n) {
            Ok(switch) => {
                self.bus.write_code(switch.code()).map_err(Error::Bus)?;
                self.selected = Some(switch);
                debug!("mux: switch {} (code {})", switch, switch.code());
                console::selected(w, switch)?;
                Ok(Outcome::Selected(switch))
            }
            Err(e) => {
                debug!("mux: {}", e);
                console::out_of_range(w)?;
                Ok(Outcome::Rejected(n))
            }
        }
    }

    /// Forget a partially typed entry (host went away mid-line).
    pub fn reset_line(&mut self) {
        self.reader.clear();
    }

    /// Last switch latched onto the address lines.
    pub fn selected(&self) -> Option<Switch> {
        self.selected
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::SelectCode;
    use std::string::String;
    use std::vec::Vec;

    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<SelectCode>,
    }

    impl AddressBus for RecordingBus {
        type Error = ();

        fn write_code(&mut self, code: SelectCode) -> Result<(), ()> {
            self.writes.push(code);
            Ok(())
        }
    }

    struct BrokenBus;

    impl AddressBus for BrokenBus {
        type Error = &'static str;

        fn write_code(&mut self, _: SelectCode) -> Result<(), &'static str> {
            Err("stuck line")
        }
    }

    #[test]
    fn init_writes_zero_code() {
        let mut s = Session::new(RecordingBus::default());
        s.init().unwrap();
        assert_eq!(s.bus().writes, [SelectCode::ZERO]);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn valid_entry_selects_and_reports() {
        let mut s = Session::new(RecordingBus::default());
        let mut out = String::new();

        assert_eq!(s.feed(b'5', &mut out), Ok(None));
        assert_eq!(
            s.feed(b'\r', &mut out),
            Ok(Some(Outcome::Selected(Switch::new(5).unwrap())))
        );
        assert_eq!(
            out,
            "5\r\nSelected switch 5\r\nA3A2A1A0 = 0100\r\n\r\nswitch (1-16)> "
        );
        assert_eq!(s.bus().writes, [SelectCode::from_bits(4)]);
        assert_eq!(s.selected().map(Switch::get), Some(5));
    }

    #[test]
    fn out_of_range_leaves_bus_alone() {
        let mut s = Session::new(RecordingBus::default());
        let mut out = String::new();

        s.feed_all(b"17", &mut out).unwrap();
        assert_eq!(s.feed(b'\n', &mut out), Ok(Some(Outcome::Rejected(17))));
        assert_eq!(s.feed_all(b"0\n", &mut out), Ok(()));
        assert!(s.bus().writes.is_empty());
        assert_eq!(s.selected(), None);
        assert_eq!(out.matches("Error: enter a number 1-16\r\n").count(), 2);
    }

    #[test]
    fn empty_line_only_reprompts() {
        let mut s = Session::new(RecordingBus::default());
        let mut out = String::new();

        assert_eq!(s.feed(b'\r', &mut out), Ok(Some(Outcome::Empty)));
        assert_eq!(out, "\r\n\r\nswitch (1-16)> ");
    }

    #[test]
    fn bus_failure_propagates() {
        let mut s = Session::new(BrokenBus);
        let mut out = String::new();

        assert_eq!(s.init(), Err(Error::Bus("stuck line")));
        assert_eq!(s.feed_all(b"3\n", &mut out), Err(Error::Bus("stuck line")));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn reset_line_drops_partial_entry() {
        let mut s = Session::new(RecordingBus::default());
        let mut out = String::new();

        s.feed_all(b"1", &mut out).unwrap();
        s.reset_line();
        s.feed_all(b"2\n", &mut out).unwrap();
        assert_eq!(s.selected().map(Switch::get), Some(2));
    }
}
