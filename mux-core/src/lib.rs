// mux-core: hardware-independent half of the multiplexer selector.
// switch:  validated switch numbers (1..=16) and their 4-bit select codes
// line:    byte-at-a-time decimal accumulator for the serial console
// bus:     address-line writer trait + portable OutputPin implementation
// console: banner, prompt and status text
// session: ties reader, bus and console into the interactive loop body
// link:    USB host detection from the start-of-frame counter
// error:   error types

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod console;
pub mod error;
pub mod line;
pub mod link;
pub mod session;
pub mod switch;

pub use bus::{AddressBus, PinBus};
pub use error::{Error, OutOfRange};
pub use line::{Entry, Input, LineReader};
pub use link::{LinkEvent, LinkMonitor};
pub use session::{Outcome, Session};
pub use switch::{SelectCode, Switch};
