//! Multi-base numeral converter state machine
//!
//! One state per base, decimal first. Digit keys append to the active
//! base's buffer under that base's validity rule; the operator keys double
//! as mode switches (`x` octal, `-` binary, `+` hex, `/` decimal),
//! converting the current entry through the decimal pivot and re-rendering
//! it in the target base. The second row carries the base label,
//! right-aligned, redrawn only when the active base actually changes.

use crate::device::keypad::Keypad;
use crate::device::lcd::{Lcd, Row, LCD_COLS};
use crate::digits::{digit_glyph, Base, BaseBuffers};
use crate::engine::key::{Key, Operator};

/// The numeral converter engine: four entry buffers and the active base.
#[derive(Debug)]
pub struct Converter {
    base: Base,
    /// Base whose label is currently on the panel; `None` forces a redraw.
    shown: Option<Base>,
    buffers: BaseBuffers,
    quit_armed: bool,
}

impl Converter {
    pub fn new() -> Self {
        Converter {
            base: Base::Decimal,
            shown: None,
            buffers: BaseBuffers::new(),
            quit_armed: false,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// The entry buffers, for callers that inspect the converted digits.
    pub fn buffers(&self) -> &BaseBuffers {
        &self.buffers
    }

    /// Force a full redraw of the active base onto a cleared panel. The
    /// shell calls this when the converter regains the display.
    pub fn refresh(&mut self, lcd: &mut Lcd) {
        self.shown = None;
        self.enter(lcd);
    }

    /// Run one tick of the polling transport: refresh the panel if the
    /// state just changed, then take at most one key.
    pub fn tick<K: Keypad>(&mut self, keypad: &mut K, lcd: &mut Lcd, reset: &mut bool) {
        self.enter(lcd);
        let key = match keypad.poll_key() {
            Some(key) => key,
            None => return,
        };
        self.handle_key(key, lcd, reset);
    }

    /// Handle one key event in the active base. Setting `reset` asks the
    /// caller to return to the mode menu.
    pub fn handle_key(&mut self, key: Key, lcd: &mut Lcd, reset: &mut bool) {
        self.enter(lcd);
        match key {
            Key::Digit(digit) => {
                self.quit_armed = false;
                self.echo_digit(digit, lcd);
            }
            Key::Op(op) => {
                self.quit_armed = false;
                self.switch_base(Self::target_base(op), lcd);
            }
            Key::Equals => {
                // No role here, but any other key disarms the quit latch.
                self.quit_armed = false;
            }
            Key::Clear => {
                if self.quit_armed {
                    self.quit_armed = false;
                    *reset = true;
                } else {
                    self.quit_armed = true;
                }
                self.buffers.get_mut(self.base).clear();
                lcd.clear();
                self.refresh(lcd);
            }
        }
    }

    /// Mode-switch assignment of the four operator keys.
    fn target_base(op: Operator) -> Base {
        match op {
            Operator::Mul => Base::Octal,
            Operator::Sub => Base::Binary,
            Operator::Add => Base::Hex,
            Operator::Div => Base::Decimal,
        }
    }

    /// Relabel and re-render on state entry, suppressed while the active
    /// base is already the one on the panel.
    fn enter(&mut self, lcd: &mut Lcd) {
        if self.shown == Some(self.base) {
            return;
        }
        self.shown = Some(self.base);
        let label = self.base.label();
        lcd.write_str_at(label, Row::Second, LCD_COLS - label.len());
        self.render_digits(lcd);
    }

    /// Draw the active buffer on the first row and leave the cursor after
    /// the digits. Hex carries a literal `0x` prefix so conversion output
    /// and direct entry read the same.
    fn render_digits(&mut self, lcd: &mut Lcd) {
        lcd.set_cursor(Row::First, 0);
        if self.base == Base::Hex {
            lcd.write_char('0');
            lcd.write_char('x');
        }
        for &digit in self.buffers.get(self.base).digits() {
            lcd.write_char(digit_glyph(digit));
        }
    }

    /// Echo a digit valid for the active base; out-of-range keys and entry
    /// past the base's capacity are ignored outright.
    fn echo_digit(&mut self, digit: u8, lcd: &mut Lcd) {
        if digit > self.base.max_entry_digit() {
            return;
        }
        let buffer = self.buffers.get_mut(self.base);
        if buffer.is_full() {
            return;
        }
        lcd.write_char(digit_glyph(digit));
        buffer.push(digit);
    }

    /// Convert the current entry into `target` and re-render. Switching to
    /// the base already active is suppressed along with its redraw.
    fn switch_base(&mut self, target: Base, lcd: &mut Lcd) {
        if target == self.base {
            return;
        }
        self.buffers.convert(self.base, target);
        self.base = target;
        lcd.clear();
        self.shown = None;
        self.enter(lcd);
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
