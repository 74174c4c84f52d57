//! # Introduction
//!
//! calcpad is a software rendition of a keypad-and-LCD embedded appliance:
//! a four-function unsigned-integer calculator and a multi-base numeral
//! converter, driven one key event at a time and rendered in the terminal
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Control flow
//!
//! ```text
//! Keypad → Key → state machine → Lcd → TUI
//! ```
//!
//! 1. [`device`] — the hardware model: [`device::lcd::Lcd`], an in-memory
//!    16×2 character panel, and [`device::keypad::Keypad`], the polling
//!    contract with its blocking `wait_key` form.
//! 2. [`digits`] — bounded digit buffers and base conversion, pivoting
//!    through decimal.
//! 3. [`engine`] — the two state machines: the calculator (three states,
//!    ANS chaining) and the numeral converter (one state per base).
//! 4. [`ui`] — ratatui front end: splash, mode menu, LCD panel, keypad
//!    legend; not part of the stable library API.
//!
//! One key event is processed per tick, strictly in arrival order, with no
//! queuing or coalescing. The core never returns errors: invalid or
//! out-of-bounds input clamps or no-ops, division by zero answers zero,
//! and arithmetic wraps at the u32 boundary, exactly as the appliance's
//! fixed-width hardware would.

pub mod device;
pub mod digits;
pub mod engine;
pub mod ui;
