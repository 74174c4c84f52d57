//! Four-function calculator state machine
//!
//! Three states: `FirstOperand` collects digits until an operator or `=`
//! flushes them; `SecondOperand` does the same for the right-hand side, and
//! an operator there chains: the running answer becomes the first operand
//! ("ANS") and entry continues; `Result` shows the answer and decides
//! whether the next key starts fresh, chains, or redisplays.
//!
//! The engine never reports an error: over-long entry stops echoing,
//! division by zero answers zero, overflow wraps. Exit back to the menu is
//! a double press of clear with nothing in between, latched through
//! `quit_armed` and delivered on the caller-owned reset signal.

use crate::device::keypad::Keypad;
use crate::device::lcd::{Lcd, Row};
use crate::digits::{digit_glyph, DigitBuffer};
use crate::engine::key::{Key, Operator};

/// Operand entry bound. A u32 operand tops out at 4294967295, ten digits.
const OPERAND_DIGITS: usize = 10;

/// Which calculator state handler is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcState {
    FirstOperand,
    SecondOperand,
    Result,
}

/// Apply an operator to two unsigned operands.
///
/// Addition and multiplication wrap on overflow. Subtraction is the
/// absolute difference; the engine has no signed representation, so the
/// result is never negative. Division by zero answers zero instead of
/// faulting. With no operator recorded, the first operand passes through.
pub fn calculate(op1: u32, op2: u32, operator: Option<Operator>) -> u32 {
    match operator {
        Some(Operator::Add) => op1.wrapping_add(op2),
        Some(Operator::Sub) => op1.abs_diff(op2),
        Some(Operator::Mul) => op1.wrapping_mul(op2),
        Some(Operator::Div) => {
            if op2 == 0 {
                0
            } else {
                op1 / op2
            }
        }
        None => op1,
    }
}

/// The calculator engine: operands, the input buffer, and the active state.
#[derive(Debug)]
pub struct Calculator {
    state: CalcState,
    input: DigitBuffer,
    first_op: u32,
    second_op: u32,
    result: u32,
    operator: Option<Operator>,
    quit_armed: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            state: CalcState::FirstOperand,
            input: DigitBuffer::new(OPERAND_DIGITS),
            first_op: 0,
            second_op: 0,
            result: 0,
            operator: None,
            quit_armed: false,
        }
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    /// Run one tick of the polling transport: take at most one key from the
    /// keypad and handle it. The `Result` state blocks on
    /// [`Keypad::wait_key`], the system's one suspension point, so the
    /// answer stays on screen until the user reacts to it.
    pub fn tick<K: Keypad>(&mut self, keypad: &mut K, lcd: &mut Lcd, reset: &mut bool) {
        let key = match self.state {
            CalcState::Result => keypad.wait_key(),
            _ => match keypad.poll_key() {
                Some(key) => key,
                None => return,
            },
        };
        self.handle_key(key, lcd, reset);
    }

    /// Handle one key event in the active state. Setting `reset` to true
    /// asks the caller to return to the mode menu; the engine never clears
    /// the signal itself.
    pub fn handle_key(&mut self, key: Key, lcd: &mut Lcd, reset: &mut bool) {
        match self.state {
            CalcState::FirstOperand => self.on_first_operand(key, lcd, reset),
            CalcState::SecondOperand => self.on_second_operand(key, lcd),
            CalcState::Result => self.on_result(key, lcd),
        }
    }

    fn on_first_operand(&mut self, key: Key, lcd: &mut Lcd, reset: &mut bool) {
        match key {
            Key::Digit(digit) => {
                self.quit_armed = false;
                self.echo_digit(digit, lcd);
            }
            Key::Op(op) => {
                self.quit_armed = false;
                self.operator = Some(op);
                lcd.write_char(op.symbol());
                self.first_op = self.input.flush();
                self.state = CalcState::SecondOperand;
            }
            Key::Equals => {
                // The second operand is whatever the previous round left
                // behind (zero on a fresh engine).
                self.quit_armed = false;
                self.first_op = self.input.flush();
                self.enter_result(lcd);
            }
            Key::Clear => {
                self.clear_all(lcd);
                if self.quit_armed {
                    self.quit_armed = false;
                    *reset = true;
                } else {
                    self.quit_armed = true;
                }
            }
        }
    }

    fn on_second_operand(&mut self, key: Key, lcd: &mut Lcd) {
        match key {
            Key::Digit(digit) => {
                self.quit_armed = false;
                self.echo_digit(digit, lcd);
            }
            Key::Op(op) => {
                // Chained operation: fold the running answer into the first
                // operand and keep collecting the next one.
                self.quit_armed = false;
                self.second_op = self.input.flush();
                self.result = calculate(self.first_op, self.second_op, self.operator);
                self.operator = Some(op);
                self.first_op = self.result;
                self.show_answer_rows(lcd);
                lcd.write_char(op.symbol());
            }
            Key::Equals => {
                self.quit_armed = false;
                self.second_op = self.input.flush();
                self.enter_result(lcd);
            }
            Key::Clear => {
                // Arm the latch so an immediate second clear exits to the
                // menu from FirstOperand.
                self.quit_armed = true;
                self.clear_all(lcd);
                self.state = CalcState::FirstOperand;
            }
        }
    }

    fn on_result(&mut self, key: Key, lcd: &mut Lcd) {
        match key {
            Key::Digit(digit) => {
                if !self.input.is_full() {
                    // A fresh digit starts the next calculation.
                    lcd.clear();
                    lcd.write_char(digit_glyph(digit));
                    self.input.push(digit);
                    self.state = CalcState::FirstOperand;
                }
            }
            Key::Op(op) => {
                // Carry the answer forward as the first operand.
                lcd.write_str_at("                ", Row::First, 0);
                self.operator = Some(op);
                lcd.write_str_at("ANS", Row::First, 0);
                self.first_op = self.result;
                lcd.write_char(op.symbol());
                self.state = CalcState::SecondOperand;
            }
            Key::Equals => {
                // Recompute with the same operands; redisplay is idempotent.
                self.enter_result(lcd);
            }
            Key::Clear => {
                self.quit_armed = true;
                self.clear_all(lcd);
                self.state = CalcState::FirstOperand;
            }
        }
    }

    /// Echo a digit at the cursor and store it. Past the operand bound the
    /// key simply stops appearing.
    fn echo_digit(&mut self, digit: u8, lcd: &mut Lcd) {
        if self.input.is_full() {
            return;
        }
        lcd.write_char(digit_glyph(digit));
        self.input.push(digit);
    }

    /// Compute and display the answer, then hand control to `Result`.
    fn enter_result(&mut self, lcd: &mut Lcd) {
        self.result = calculate(self.first_op, self.second_op, self.operator);
        lcd.write_str_at("ANS:            ", Row::Second, 0);
        lcd.write_str_at(&self.result.to_string(), Row::Second, 5);
        self.state = CalcState::Result;
    }

    /// Running answer on the second row, `ANS` on a blanked first row with
    /// the cursor parked after it for the next operator glyph.
    fn show_answer_rows(&mut self, lcd: &mut Lcd) {
        lcd.write_str_at("ANS:            ", Row::Second, 0);
        lcd.write_str_at(&self.result.to_string(), Row::Second, 5);
        lcd.write_str_at("                ", Row::First, 0);
        lcd.write_str_at("ANS", Row::First, 0);
    }

    fn clear_all(&mut self, lcd: &mut Lcd) {
        lcd.clear();
        self.first_op = 0;
        self.second_op = 0;
        self.result = 0;
        self.operator = None;
        self.input.clear();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
