//! Named colors and text styles shared by the logger, the loader and the banner.

use super::Color;

pub const MAGENTA: Color = Color::Indexed(97);
/// Brighter 24-bit violet used for timestamps.
pub const VIOLET: Color = Color::Rgb(157, 38, 255);
pub const RED: Color = Color::Indexed(196);
pub const GREEN: Color = Color::Indexed(40);
pub const YELLOW: Color = Color::Indexed(220);
pub const BLUE: Color = Color::Indexed(21);
pub const PINK: Color = Color::Indexed(176);
pub const CYAN: Color = Color::Basic(96);
pub const GRAY: Color = Color::Basic(90);

pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = Color::RESET;
