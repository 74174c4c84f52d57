//! Digit buffers and numeral-base conversion
//!
//! This module provides the numeric substrate for both engines:
//! - [`buffer`]: [`Base`] and the bounded [`DigitBuffer`] a number is typed
//!   into, plus the digit-to-glyph mapper for hex output
//! - [`convert`]: [`BaseBuffers`], the per-base buffer set with the
//!   pivot-through-decimal conversion routines
//!
//! # Representation
//!
//! A number being entered lives as an ordered sequence of single-digit
//! values, most-significant first, with a fixed per-base capacity. The empty
//! buffer means "no value entered yet" and is deliberately distinct from a
//! buffer holding the single digit zero.
//!
//! [`Base`]: buffer::Base
//! [`DigitBuffer`]: buffer::DigitBuffer
//! [`BaseBuffers`]: convert::BaseBuffers

pub mod buffer;
pub mod convert;

pub use buffer::{digit_glyph, Base, DigitBuffer};
pub use convert::BaseBuffers;
