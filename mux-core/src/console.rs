// Console text: banner, prompt and per-entry status lines.
// Everything writes through core::fmt::Write and ends lines with CRLF,
// since the host terminal is in raw mode and won't translate LF.

use core::fmt::{self, Write};

use crate::switch::Switch;

pub const NEWLINE: &str = "\r\n";
pub const PROMPT: &str = "switch (1-16)> ";

const RULE: &str = "============================";

const BANNER_LINES: &[&str] = &[
    " Multiplexer Control Ready",
    " Enter switch number 1-16",
    " Mapping: switch -> (switch-1)",
    " Example: 1 -> 0000, 16 -> 1111",
];

// backspace, space, backspace
const RUBOUT: &str = "\x08 \x08";

pub fn banner<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str(NEWLINE)?;
    w.write_str(RULE)?;
    w.write_str(NEWLINE)?;
    for line in BANNER_LINES {
        w.write_str(line)?;
        w.write_str(NEWLINE)?;
    }
    w.write_str(RULE)?;
    w.write_str(NEWLINE)?;
    w.write_str(NEWLINE)?;
    prompt(w)
}

#[inline]
pub fn prompt<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str(PROMPT)
}

#[inline]
pub fn newline<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str(NEWLINE)
}

pub fn echo<W: Write>(w: &mut W, byte: u8) -> fmt::Result {
    w.write_char(byte as char)
}

pub fn erase<W: Write>(w: &mut W) -> fmt::Result {
    w.write_str(RUBOUT)
}

pub fn selected<W: Write>(w: &mut W, switch: Switch) -> fmt::Result {
    write!(w, "Selected switch {}{}", switch, NEWLINE)?;
    write!(w, "A3A2A1A0 = {}{}", switch.code(), NEWLINE)
}

pub fn out_of_range<W: Write>(w: &mut W) -> fmt::Result {
    write!(
        w,
        "Error: enter a number {}-{}{}",
        Switch::MIN,
        Switch::MAX,
        NEWLINE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    #[test]
    fn banner_ends_at_prompt() {
        let mut out = String::new();
        banner(&mut out).unwrap();
        assert!(out.starts_with("\r\n============================\r\n"));
        assert!(out.contains(" Example: 1 -> 0000, 16 -> 1111\r\n"));
        assert!(out.ends_with("============================\r\n\r\nswitch (1-16)> "));
        assert!(!out.contains("\n\n"));
    }

    #[test]
    fn selection_report() {
        let mut out = String::new();
        selected(&mut out, Switch::new(11).unwrap()).unwrap();
        assert_eq!(out, "Selected switch 11\r\nA3A2A1A0 = 1010\r\n");
    }

    #[test]
    fn range_error_text() {
        let mut out = String::new();
        out_of_range(&mut out).unwrap();
        assert_eq!(out, "Error: enter a number 1-16\r\n");
    }
}
