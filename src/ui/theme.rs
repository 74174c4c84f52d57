use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color, // Blue
    pub comment: Color, // Grey
    pub border_focused: Color,
    pub border_normal: Color,
    pub lcd_bg: Color,     // Backlight green
    pub lcd_fg: Color,     // Dark segment pixels
    pub lcd_cursor: Color, // Cursor cell shade
    pub keycap: Color,     // Key badge background
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250), // Blue
    comment: Color::Rgb(108, 112, 134),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the panel
    border_normal: Color::Rgb(108, 112, 134),  // Grey border elsewhere
    lcd_bg: Color::Rgb(122, 148, 48),          // Yellow-green backlight
    lcd_fg: Color::Rgb(26, 34, 10),            // Near-black segments
    lcd_cursor: Color::Rgb(96, 120, 34),       // Slightly darker backlight
    keycap: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
