// Wake/sleep primitives for the single-threaded main loop.
// One periodic timer interrupt drives everything; WFI idles the CPU
// between ticks.

pub mod wake;

pub use wake::{TICK_MS, wait_tick};
