//! Rendering helpers kept apart from the logger: colors and the named palette,
//! label casing and alignment, ANSI stripping, and the elapsed-time suffix.

mod color;
mod elapsed;
pub mod palette;
mod strip;
mod tag;

pub use color::{Color, colorize};
pub use elapsed::{ELAPSED_WIDTH, Elapsed};
pub use strip::strip_ansi;
pub use tag::{Alignment, Transform};
