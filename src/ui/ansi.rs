//! ANSI escape sequences and the colour palette.
//!
//! The screen engine deliberately avoids a terminal-emulation library and
//! drives the terminal with these raw sequences only. Everything here is
//! process-wide read-only data.

/// Hide the terminal cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";
/// Show the terminal cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";
/// Move the cursor to the top-left corner (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";
/// Clear the screen and the scrollback buffer, cursor to home.
pub const CLEAR_ALL: &str = "\x1b[H\x1b[2J\x1b[3J";

/// An ANSI colour code applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour(&'static str);

impl Colour {
    pub const PURPLE: Colour = Colour("\x1b[38;5;127m");
    pub const RED: Colour = Colour("\x1b[38;5;196m");
    pub const BLUE: Colour = Colour("\x1b[38;5;81m");
    pub const ORANGE: Colour = Colour("\x1b[38;5;208m");
    pub const GREY: Colour = Colour("\x1b[38;5;238m");
    pub const GREEN: Colour = Colour("\x1b[38;5;120m");
    pub const RESET: Colour = Colour("\x1b[0m");
    /// Background highlight for the selected table row.
    pub const HIGHLIGHT: Colour = Colour("\x1b[48;5;166m");

    /// Wrap `s` in this colour followed by a reset, so the colour never
    /// bleeds into subsequent output.
    pub fn paint(&self, s: &str) -> String {
        format!("{}{}{}", self.0, s, Colour::RESET.0)
    }

    /// The raw escape sequence.
    pub fn code(&self) -> &'static str {
        self.0
    }
}
