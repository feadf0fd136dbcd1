//! The palette mixes 256-color indices with a few 24-bit accents, so a color
//! is either form and renders to the matching SGR escape.

use std::fmt;

/// A terminal color in one of the three SGR forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 16-color SGR code (30-37, 90-97) for terminals stuck on the basic palette.
    Basic(u8),
    /// 256-color palette index, rendered as `38;5;N`.
    Indexed(u8),
    /// 24-bit true color, rendered as `38;2;R;G;B`.
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

impl Color {
    /// Clears all SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }

    /// Foreground escape for this color.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        match self {
            Self::Basic(code) => format!("\x1b[{code}m"),
            Self::Indexed(n) => format!("\x1b[38;5;{n}m"),
            Self::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::Basic(37)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(code) => write!(f, "ansi({code})"),
            Self::Indexed(n) => write!(f, "256({n})"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// `text` in `color`, followed by a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
