use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub muted: Color,     // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub highlight_bg: Color, // Slightly lighter BG for the active row
    pub rod: Color,          // Poles, bases, and rod letters
    pub disks: [Color; 10],  // Cycled by disk size
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    muted: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    highlight_bg: Color::Rgb(50, 50, 70),
    rod: Color::Rgb(147, 153, 178),
    disks: [
        Color::Rgb(243, 139, 168), // Red
        Color::Rgb(250, 179, 135), // Peach
        Color::Rgb(249, 226, 175), // Yellow
        Color::Rgb(166, 227, 161), // Green
        Color::Rgb(148, 226, 213), // Teal
        Color::Rgb(137, 220, 235), // Sky
        Color::Rgb(137, 180, 250), // Blue
        Color::Rgb(180, 190, 254), // Lavender
        Color::Rgb(203, 166, 247), // Mauve
        Color::Rgb(245, 194, 231), // Pink
    ],
};
