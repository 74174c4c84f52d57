//! Main TUI application state and logic
//!
//! The app is the appliance's "main board": it owns the LCD, both engines,
//! and the shared reset signal, and plays the role of the firmware's
//! mode-selection loop: splash, menu, then one key per tick routed to the
//! active engine. When an engine raises the reset signal (double clear),
//! the app clears it and returns to the menu.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::device::lcd::{Lcd, Row};
use crate::engine::calculator::Calculator;
use crate::engine::converter::Converter;
use crate::engine::key::Key;

/// How long the boot splash stays up without a key press.
const SPLASH_DURATION: Duration = Duration::from_millis(2500);

/// Which appliance screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Menu,
    Calculator,
    Converter,
}

/// The main application state.
pub struct App {
    pub screen: Screen,
    pub lcd: Lcd,
    pub calculator: Calculator,
    pub converter: Converter,

    /// Shared "return to menu" signal, raised by the engines and cleared
    /// here; the engines only ever write `true`.
    pub reset_requested: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: String,

    /// When the splash screen hands over to the menu.
    splash_until: Instant,
}

impl App {
    pub fn new() -> Self {
        let mut lcd = Lcd::new();
        // Boot splash, straight from the firmware's selection state.
        lcd.write_str_at("<<Calculator>>", Row::First, 1);
        lcd.write_str_at("Select calc mode", Row::Second, 0);

        App {
            screen: Screen::Splash,
            lcd,
            calculator: Calculator::new(),
            converter: Converter::new(),
            reset_requested: false,
            should_quit: false,
            status_message: String::from("Booting..."),
            splash_until: Instant::now() + SPLASH_DURATION,
        }
    }

    /// Run the TUI application.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.screen == Screen::Splash && Instant::now() >= self.splash_until {
                self.show_menu();
            }

            // Poll with a timeout so the splash timer keeps ticking.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI: LCD panel on top, keypad legend, status bar.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let cursor = match self.screen {
            Screen::Calculator | Screen::Converter => Some(self.lcd.cursor()),
            _ => None,
        };

        super::panes::render_lcd_pane(frame, chunks[0], &self.lcd, cursor);
        super::panes::render_keypad_pane(frame, chunks[1], self.screen);
        super::panes::render_status_bar(frame, chunks[2], &self.status_message, self.screen);
    }

    /// Handle keyboard events for the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Splash => {
                // Any key skips the splash.
                self.show_menu();
            }
            Screen::Menu => match key.code {
                KeyCode::Char('1') => self.enter_calculator(),
                KeyCode::Char('2') => self.enter_converter(),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {}
            },
            Screen::Calculator => {
                if key.code == KeyCode::Esc {
                    self.show_menu();
                } else if let Some(k) = map_key(key.code) {
                    self.calculator
                        .handle_key(k, &mut self.lcd, &mut self.reset_requested);
                    self.observe_reset();
                }
            }
            Screen::Converter => {
                if key.code == KeyCode::Esc {
                    self.show_menu();
                } else if let Some(k) = map_key(key.code) {
                    self.converter
                        .handle_key(k, &mut self.lcd, &mut self.reset_requested);
                    self.observe_reset();
                }
            }
        }
    }

    /// The engines request exit through the shared reset signal; the shell
    /// observes it, clears it, and routes back to the menu.
    fn observe_reset(&mut self) {
        if self.reset_requested {
            self.reset_requested = false;
            self.show_menu();
        }
    }

    fn show_menu(&mut self) {
        self.screen = Screen::Menu;
        self.lcd.clear();
        self.lcd.write_str_at("1:Calculator", Row::First, 0);
        self.lcd.write_str_at("2:Base Converter", Row::Second, 0);
        self.status_message = String::from("Select a mode");
    }

    fn enter_calculator(&mut self) {
        // The calculator's display is echo-driven and cannot be replayed
        // onto a cleared panel, so entry always starts a fresh engine.
        self.calculator = Calculator::new();
        self.screen = Screen::Calculator;
        self.lcd.clear();
        self.status_message = String::from("Calculator ready");
    }

    fn enter_converter(&mut self) {
        self.screen = Screen::Converter;
        self.lcd.clear();
        self.converter.refresh(&mut self.lcd);
        self.status_message = String::from("Base converter ready");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a terminal key onto the appliance's keypad. Enter doubles as `=` and
/// Backspace as clear; everything unmapped is ignored, like a key the
/// keypad simply does not have.
fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Enter => Some(Key::Equals),
        KeyCode::Backspace => Some(Key::Clear),
        _ => None,
    }
}
