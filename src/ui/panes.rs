//! Rendering logic for each TUI pane

use crate::device::lcd::{Lcd, Row};
use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the LCD panel: two 16-character rows on a backlit bezel, with the
/// write cursor highlighted while an engine owns the display.
pub fn render_lcd_pane(frame: &mut Frame, area: Rect, lcd: &Lcd, cursor: Option<(Row, usize)>) {
    let block = Block::default()
        .title(" LCD ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let bezel = Style::default().bg(DEFAULT_THEME.lcd_bg);
    let blank = " ".repeat(18);
    let lines = vec![
        Line::from(Span::styled(blank.clone(), bezel)),
        lcd_row_line(lcd, Row::First, cursor),
        lcd_row_line(lcd, Row::Second, cursor),
        Line::from(Span::styled(blank, bezel)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn lcd_row_line(lcd: &Lcd, row: Row, cursor: Option<(Row, usize)>) -> Line<'static> {
    let cell_style = Style::default()
        .bg(DEFAULT_THEME.lcd_bg)
        .fg(DEFAULT_THEME.lcd_fg);

    let mut spans = vec![Span::styled(" ".to_string(), cell_style)];
    for (col, ch) in lcd.line(row).chars().enumerate() {
        let style = if cursor == Some((row, col)) {
            cell_style
                .bg(DEFAULT_THEME.lcd_cursor)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            cell_style
        };
        spans.push(Span::styled(ch.to_string(), style));
    }
    spans.push(Span::styled(" ".to_string(), cell_style));
    Line::from(spans)
}

/// Render the keypad legend for the active screen.
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, screen: Screen) {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines = match screen {
        Screen::Splash => vec![key_line(&[("any key", "skip the splash")])],
        Screen::Menu => vec![
            key_line(&[("1", "calculator"), ("2", "base converter")]),
            key_line(&[("q", "quit")]),
        ],
        Screen::Calculator => vec![
            key_line(&[("0-9", "digits"), ("+ - x /", "operators")]),
            key_line(&[("=", "equals (Enter too)"), ("c", "clear, twice for menu")]),
            key_line(&[("Esc", "back to menu")]),
        ],
        Screen::Converter => vec![
            key_line(&[("0-9", "digits")]),
            key_line(&[("x", "octal"), ("-", "binary"), ("+", "hex"), ("/", "decimal")]),
            key_line(&[("c", "clear, twice for menu"), ("Esc", "back to menu")]),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn key_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default().bg(DEFAULT_THEME.keycap).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut spans = Vec::new();
    for (key, desc) in pairs {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!(" {}   ", desc), desc_style));
    }
    Line::from(spans)
}

/// Render the status bar: mode badge and message on the left, context hints
/// on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, screen: Screen) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let badge = match screen {
        Screen::Splash => " BOOT ",
        Screen::Menu => " MENU ",
        Screen::Calculator => " CALC ",
        Screen::Converter => " CONV ",
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let hint = match screen {
        Screen::Splash => "boots in a moment",
        Screen::Menu => "q to quit",
        Screen::Calculator | Screen::Converter => "Esc for menu",
    };
    let right = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", hint),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.comment),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
