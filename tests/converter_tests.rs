// Scenario tests for the numeral converter: scripted keypads in, LCD text out.

use calcpad::device::keypad::ScriptedKeypad;
use calcpad::device::lcd::{Lcd, Row};
use calcpad::digits::Base;
use calcpad::engine::converter::Converter;
use calcpad::engine::key::Key;

/// Turn a key legend like "255+" into keypad events (`x` octal, `-` binary,
/// `+` hex, `/` decimal, `c` clear).
fn script(keys: &str) -> Vec<Key> {
    keys.chars()
        .map(|c| Key::from_char(c).expect("unmapped key in script"))
        .collect()
}

/// Drive a fresh converter through the script one tick at a time.
fn run(keys: &str) -> (Converter, Lcd, bool) {
    let mut conv = Converter::new();
    let mut lcd = Lcd::new();
    let mut reset = false;
    let mut keypad = ScriptedKeypad::new(script(keys));
    while !keypad.is_exhausted() {
        conv.tick(&mut keypad, &mut lcd, &mut reset);
    }
    (conv, lcd, reset)
}

#[test]
fn test_initial_state_labels_decimal() {
    let mut conv = Converter::new();
    let mut lcd = Lcd::new();
    conv.refresh(&mut lcd);
    assert_eq!(conv.base(), Base::Decimal);
    assert_eq!(lcd.line(Row::Second), "         DECIMAL");
    assert_eq!(lcd.cursor(), (Row::First, 0));
}

#[test]
fn test_decimal_to_hex_scenario() {
    let (conv, lcd, _) = run("255+");
    assert_eq!(conv.base(), Base::Hex);
    assert_eq!(lcd.line(Row::First).trim_end(), "0xFF");
    assert_eq!(lcd.line(Row::Second), "             HEX");
}

#[test]
fn test_empty_buffer_converts_to_empty() {
    let (conv, lcd, _) = run("-");
    assert_eq!(conv.base(), Base::Binary);
    assert_eq!(lcd.line(Row::First).trim_end(), "");
    assert_eq!(lcd.line(Row::Second), "          BINARY");
}

#[test]
fn test_round_trip_decimal_hex_decimal() {
    let (conv, lcd, _) = run("255+/");
    assert_eq!(conv.base(), Base::Decimal);
    assert_eq!(lcd.line(Row::First).trim_end(), "255");
}

#[test]
fn test_decimal_to_octal_and_binary() {
    let (_, lcd, _) = run("64x");
    assert_eq!(lcd.line(Row::First).trim_end(), "100");
    assert_eq!(lcd.line(Row::Second), "           OCTAL");

    let (_, lcd, _) = run("6-");
    assert_eq!(lcd.line(Row::First).trim_end(), "110");
}

#[test]
fn test_nondecimal_to_nondecimal_pivots() {
    // 255 decimal -> hex (0xFF) -> octal (377), without touching decimal
    // mode in between.
    let (conv, lcd, _) = run("255+x");
    assert_eq!(conv.base(), Base::Octal);
    assert_eq!(lcd.line(Row::First).trim_end(), "377");
}

#[test]
fn test_digit_validity_per_base() {
    // 8 and 9 are not octal digits; the keys are ignored outright.
    let (conv, lcd, _) = run("x89177");
    assert_eq!(conv.base(), Base::Octal);
    assert_eq!(lcd.line(Row::First).trim_end(), "177");

    // Binary accepts only 0 and 1.
    let (_, lcd, _) = run("-10210");
    assert_eq!(lcd.line(Row::First).trim_end(), "1010");
}

#[test]
fn test_hex_entry_accepts_only_decimal_keys() {
    // The keypad has no letter keys: hex entry is digits 0-9, echoed after
    // the 0x prefix.
    let (conv, lcd, _) = run("+10");
    assert_eq!(conv.base(), Base::Hex);
    assert_eq!(lcd.line(Row::First).trim_end(), "0x10");

    // 0x10 back to decimal is 16.
    let (_, lcd, _) = run("+10/");
    assert_eq!(lcd.line(Row::First).trim_end(), "16");
}

#[test]
fn test_entry_caps_at_base_capacity() {
    // Decimal holds five digits; the sixth key press has no effect.
    let (conv, lcd, _) = run("999999");
    assert_eq!(lcd.line(Row::First).trim_end(), "99999");
    assert_eq!(conv.buffers().get(Base::Decimal).digits().len(), 5);

    // Hex holds four.
    let (conv, lcd, _) = run("+12345");
    assert_eq!(lcd.line(Row::First).trim_end(), "0x1234");
    assert_eq!(conv.buffers().get(Base::Hex).digits().len(), 4);
}

#[test]
fn test_oversized_value_truncates_to_capacity() {
    // 99999 needs 17 binary digits; the buffer keeps the low 16.
    let (_, lcd, _) = run("99999-");
    assert_eq!(lcd.line(Row::First), "1000011010011111");
}

#[test]
fn test_switch_to_active_base_is_a_no_op() {
    let (_, lcd, _) = run("42");
    let before_first = lcd.line(Row::First);
    let before_second = lcd.line(Row::Second);

    let (_, lcd, _) = run("42/");
    assert_eq!(lcd.line(Row::First), before_first);
    assert_eq!(lcd.line(Row::Second), before_second);
}

#[test]
fn test_clear_empties_active_buffer_and_relabels() {
    let (conv, lcd, reset) = run("255c");
    assert!(!reset);
    assert!(conv.buffers().get(Base::Decimal).is_empty());
    assert_eq!(lcd.line(Row::First).trim_end(), "");
    assert_eq!(lcd.line(Row::Second), "         DECIMAL");
}

#[test]
fn test_double_clear_requests_menu_exit() {
    let (_, _, reset) = run("cc");
    assert!(reset);

    // Any key in between disarms the latch.
    let (_, _, reset) = run("c5c");
    assert!(!reset);
    let (_, _, reset) = run("c5cc");
    assert!(reset);
}

#[test]
fn test_typed_zero_collapses_to_empty_after_conversion() {
    // Conversion expands the value zero to no digits at all; only direct
    // entry can show a literal 0 on the panel.
    let (_, lcd, _) = run("0-");
    assert_eq!(lcd.line(Row::First).trim_end(), "");
}

#[test]
fn test_conversion_survives_mode_round_robin() {
    // 100 decimal -> octal 144 -> binary 1100100 -> hex 0x64 -> decimal 100.
    let (conv, lcd, _) = run("100x-+/");
    assert_eq!(conv.base(), Base::Decimal);
    assert_eq!(lcd.line(Row::First).trim_end(), "100");
}
