// Serial-console selector for a 16-channel analog multiplexer (ESP32-C3)

#![no_std]

pub mod board;
pub mod drivers;
pub mod kernel;
