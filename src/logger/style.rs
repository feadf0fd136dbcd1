//! The two line layouts a logger can be built with. Stripped of colors both read
//! `[prefix] [HH:MM:SS] [LABEL] -> message`; they differ only in how much of the
//! line is colored.

use crate::fmt::{Color, Elapsed, palette};
use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// Closed set of layouts, chosen explicitly when the logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Every bracket, stamp and message colored with the palette.
    #[default]
    Color,
    /// Only the label is colored; the rest uses the terminal's default color.
    Simple,
}

impl Style {
    /// Unknown names fall back to the color layout.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "simple" | "plain" | "2" => Self::Simple,
            _ => Self::Color,
        }
    }
}

/// Everything needed to render one line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<'a> {
    pub level: Level,
    pub label: &'a str,
    pub message: &'a str,
    pub elapsed: Option<Elapsed>,
    pub time: &'a DateTime<Local>,
}

impl Style {
    pub(crate) fn render(self, prefix: Option<&str>, entry: &Entry<'_>) -> String {
        match self {
            Self::Color => render_color(prefix, entry),
            Self::Simple => render_simple(prefix, entry),
        }
    }
}

fn clock(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

fn render_color(prefix: Option<&str>, entry: &Entry<'_>) -> String {
    let frame = palette::PINK.fg_ansi();
    let accent = entry.level.color().fg_ansi();
    let mut out = String::new();

    if let Some(prefix) = prefix {
        let name = palette::MAGENTA.fg_ansi();
        let _ = write!(out, "{frame}[{name}{prefix}{frame}] ");
    }
    let stamp = palette::VIOLET.fg_ansi();
    let _ = write!(
        out,
        "{frame}[{stamp}{}{frame}] [{accent}{}{frame}] -> {accent}{}",
        clock(entry.time),
        entry.label,
        entry.message
    );
    if let Some(elapsed) = entry.elapsed {
        out.push_str(&elapsed.suffix());
    }
    out.push_str(Color::RESET);
    out
}

fn render_simple(prefix: Option<&str>, entry: &Entry<'_>) -> String {
    let accent = entry.level.color().fg_ansi();
    let reset = Color::RESET;
    let mut out = String::new();

    if let Some(prefix) = prefix {
        let _ = write!(out, "[{prefix}] ");
    }
    let _ = write!(
        out,
        "[{}] [{accent}{}{reset}] -> {}",
        clock(entry.time),
        entry.label,
        entry.message
    );
    if let Some(elapsed) = entry.elapsed {
        out.push_str(&elapsed.suffix());
    }
    out
}
