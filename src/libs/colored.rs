// plain SGR sequences; the editor counts prompt bytes itself, so unlike
// readline prompts nothing here is wrapped in '\x01' .. '\x02'.
pub const RESET: &str = "\x1B[0m";

pub const CLEAR_SCREEN: &str = "\x1B[H\x1B[2J";
pub const ERASE_LINE_RIGHT: &str = "\x1B[0K";
pub const QUERY_CURSOR: &str = "\x1B[6n";
pub const BELL: &str = "\x07";

/// Foreground colors a hint may be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl Color {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// `ESC [ <bold>;<color>;49m`, default background.
pub fn sgr(bold: bool, color: Color) -> String {
    format!("\x1B[{};{};49m", if bold { 1 } else { 0 }, color.code())
}

pub fn cursor_forward(n: usize) -> String {
    format!("\x1B[{}C", n)
}

pub fn cursor_backward(n: usize) -> String {
    format!("\x1B[{}D", n)
}

pub fn cursor_up(n: usize) -> String {
    format!("\x1B[{}A", n)
}

pub fn cursor_down(n: usize) -> String {
    format!("\x1B[{}B", n)
}
