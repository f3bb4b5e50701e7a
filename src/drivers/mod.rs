// Chip-level drivers, board-independent.
//
// Pin and peripheral wiring lives in board/; these only know the
// peripheral they wrap.

pub mod usb_console;
