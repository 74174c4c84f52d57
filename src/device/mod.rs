//! Hardware model for the appliance's keypad and display
//!
//! The real appliance scans a matrix keypad and drives a character LCD;
//! here both are in-memory stand-ins. [`keypad::Keypad`] is the polling
//! seam the engines are generic over, and [`lcd::Lcd`] records exactly what
//! a 16×2 panel would show, so the TUI and the tests read the same cells
//! the engines wrote.

pub mod keypad;
pub mod lcd;
