//! Base conversion over the converter's four entry buffers
//!
//! The decimal buffer is the pivot: every conversion either flushes decimal
//! digits into a value and re-expands them under the target radix, or folds
//! a non-decimal buffer into a value by positional powers and re-expands it
//! as decimal digits. Non-decimal to non-decimal runs both halves in
//! sequence. An empty source always converts to an empty destination:
//! "nothing entered yet" survives a mode switch instead of growing a
//! phantom zero digit.

use super::buffer::{Base, DigitBuffer};

/// The four per-base entry buffers, one per converter state.
#[derive(Debug, Clone)]
pub struct BaseBuffers {
    decimal: DigitBuffer,
    octal: DigitBuffer,
    binary: DigitBuffer,
    hex: DigitBuffer,
}

impl BaseBuffers {
    pub fn new() -> Self {
        BaseBuffers {
            decimal: DigitBuffer::for_base(Base::Decimal),
            octal: DigitBuffer::for_base(Base::Octal),
            binary: DigitBuffer::for_base(Base::Binary),
            hex: DigitBuffer::for_base(Base::Hex),
        }
    }

    pub fn get(&self, base: Base) -> &DigitBuffer {
        match base {
            Base::Decimal => &self.decimal,
            Base::Octal => &self.octal,
            Base::Binary => &self.binary,
            Base::Hex => &self.hex,
        }
    }

    pub fn get_mut(&mut self, base: Base) -> &mut DigitBuffer {
        match base {
            Base::Decimal => &mut self.decimal,
            Base::Octal => &mut self.octal,
            Base::Binary => &mut self.binary,
            Base::Hex => &mut self.hex,
        }
    }

    /// Convert the contents of the `from` buffer into the `to` buffer,
    /// pivoting through decimal when neither side is decimal. Converting a
    /// base onto itself is a no-op.
    pub fn convert(&mut self, from: Base, to: Base) {
        if from == to {
            return;
        }
        if from != Base::Decimal {
            self.base_to_decimal(from);
        }
        if to != Base::Decimal {
            self.decimal_to_base(to);
        }
    }

    /// Fold the `from` buffer by positional powers and re-expand the value
    /// as decimal digits.
    fn base_to_decimal(&mut self, from: Base) {
        let value = self.get(from).value(from.radix());
        let decimal = &mut self.decimal;
        decimal.clear();
        decimal.push_digits_reversed(value, 10);
        decimal.reverse();
    }

    /// Flush the decimal buffer (emptying it) and re-expand the value under
    /// the target radix by repeated division.
    fn decimal_to_base(&mut self, to: Base) {
        let value = self.decimal.flush();
        let target = self.get_mut(to);
        target.clear();
        target.push_digits_reversed(value, to.radix());
        target.reverse();
    }
}

impl Default for BaseBuffers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(buffers: &mut BaseBuffers, base: Base, digits: &[u8]) {
        let buf = buffers.get_mut(base);
        buf.clear();
        for &d in digits {
            buf.push(d);
        }
    }

    #[test]
    fn test_decimal_to_hex() {
        let mut buffers = BaseBuffers::new();
        type_digits(&mut buffers, Base::Decimal, &[2, 5, 5]);
        buffers.convert(Base::Decimal, Base::Hex);
        assert_eq!(buffers.get(Base::Hex).digits(), &[15, 15]);
    }

    #[test]
    fn test_octal_to_decimal() {
        let mut buffers = BaseBuffers::new();
        type_digits(&mut buffers, Base::Octal, &[1, 7, 7]);
        buffers.convert(Base::Octal, Base::Decimal);
        assert_eq!(buffers.get(Base::Decimal).digits(), &[1, 2, 7]);
    }

    #[test]
    fn test_pivot_binary_to_hex() {
        let mut buffers = BaseBuffers::new();
        type_digits(&mut buffers, Base::Binary, &[1, 0, 1, 1, 0, 1]);
        buffers.convert(Base::Binary, Base::Hex);
        assert_eq!(buffers.get(Base::Hex).digits(), &[2, 13]); // 0x2D
        // The pivot ran through the decimal buffer, which flush() emptied.
        assert!(buffers.get(Base::Decimal).is_empty());
    }

    #[test]
    fn test_round_trip_preserves_value() {
        for base in [Base::Octal, Base::Binary, Base::Hex] {
            let mut buffers = BaseBuffers::new();
            type_digits(&mut buffers, Base::Decimal, &[6, 5, 5, 3, 5]);
            buffers.convert(Base::Decimal, base);
            buffers.convert(base, Base::Decimal);
            assert_eq!(
                buffers.get(Base::Decimal).value(10),
                65535,
                "round trip through {:?}",
                base
            );
        }
    }

    #[test]
    fn test_empty_converts_to_empty() {
        let mut buffers = BaseBuffers::new();
        buffers.convert(Base::Decimal, Base::Binary);
        assert!(buffers.get(Base::Binary).is_empty());
        buffers.convert(Base::Binary, Base::Hex);
        assert!(buffers.get(Base::Hex).is_empty());
    }

    #[test]
    fn test_leading_zeros_collapse() {
        let mut buffers = BaseBuffers::new();
        type_digits(&mut buffers, Base::Decimal, &[0, 0, 7]);
        buffers.convert(Base::Decimal, Base::Octal);
        assert_eq!(buffers.get(Base::Octal).digits(), &[7]);
        buffers.convert(Base::Octal, Base::Decimal);
        assert_eq!(buffers.get(Base::Decimal).digits(), &[7]);
    }

    #[test]
    fn test_overflowing_value_keeps_low_digits() {
        // 99999 needs 17 bits; the binary buffer holds 16, so the high bit
        // is dropped by the capacity clamp.
        let mut buffers = BaseBuffers::new();
        type_digits(&mut buffers, Base::Decimal, &[9, 9, 9, 9, 9]);
        buffers.convert(Base::Decimal, Base::Binary);
        let binary = buffers.get(Base::Binary);
        assert_eq!(binary.len(), 16);
        assert_eq!(binary.value(2), 0x869F);
    }
}
