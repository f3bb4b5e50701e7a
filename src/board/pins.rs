//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  0   | MUX A0 (S0)     | Select LSB
//!  1   | MUX A1 (S1)     |
//!  2   | MUX A2 (S2)     | Strapping pin, only sampled at reset
//!  3   | MUX A3 (S3)     | Select MSB
//! 18   | USB D-          | USB-Serial-JTAG console
//! 19   | USB D+          | USB-Serial-JTAG console

use mux_core::bus::pin_mask;

// ----- Multiplexer address lines -----
pub const MUX_A0: u8 = 0;
pub const MUX_A1: u8 = 1;
pub const MUX_A2: u8 = 2;
pub const MUX_A3: u8 = 3;

pub const MUX_LINES: [u8; 4] = [MUX_A0, MUX_A1, MUX_A2, MUX_A3];

// GPIO_OUT bits covered by the address lines
pub const MUX_MASK: u32 = pin_mask(&MUX_LINES);
