//! Start-up banner: block-letter title, optional ad-info and credits lines,
//! a welcome line and a closing rule.
//!
//! Layout is computed on plain text by [`Home::render_lines`] for a given
//! width; [`Home::display`] queries the terminal, colors the rows and prints.

mod glyphs;

pub use glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph_rows, render_block};

use crate::fmt::{Alignment, colorize, palette};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, IsTerminal, Write};

/// Width used when the terminal can't be queried (output redirected to a file).
pub const FALLBACK_WIDTH: usize = 80;

/// Minimum gap between the two ad-info strings.
const MIN_ADINFO_GAP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Block,
    AdInfo,
    Credits,
    Welcome,
    Rule,
}

/// Banner screen shown at program start.
#[derive(Debug, Clone)]
pub struct Home {
    text: String,
    align: Alignment,
    adinfo1: Option<String>,
    adinfo2: Option<String>,
    credits: Option<String>,
    clear: bool,
    username: Option<String>,
    colors: bool,
}

impl Home {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Alignment::Center,
            adinfo1: None,
            adinfo2: None,
            credits: None,
            clear: false,
            username: None,
            colors: io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Left-hand ad-info string.
    #[must_use]
    pub fn adinfo1(mut self, text: impl Into<String>) -> Self {
        self.adinfo1 = Some(text.into());
        self
    }

    /// Right-hand ad-info string.
    #[must_use]
    pub fn adinfo2(mut self, text: impl Into<String>) -> Self {
        self.adinfo2 = Some(text.into());
        self
    }

    #[must_use]
    pub fn credits(mut self, text: impl Into<String>) -> Self {
        self.credits = Some(text.into());
        self
    }

    /// Clear the screen before drawing.
    #[must_use]
    pub const fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Name on the welcome line; defaults to `USER`/`USERNAME`.
    #[must_use]
    pub fn username(mut self, name: impl Into<String>) -> Self {
        self.username = Some(name.into());
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    fn user(&self) -> String {
        self.username
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .unwrap_or_else(|| "user".to_string())
    }

    /// Block width in columns: every character takes one glyph cell.
    #[must_use]
    pub fn block_width(&self) -> usize {
        self.text.chars().count() * GLYPH_WIDTH
    }

    /// Two strings spread across the block width, at least a small gap apart.
    fn adinfo_line(&self) -> Option<String> {
        match (&self.adinfo1, &self.adinfo2) {
            (None, None) => None,
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (Some(left), Some(right)) => {
                let used = left.chars().count() + right.chars().count();
                let gap = self.block_width().saturating_sub(used).max(MIN_ADINFO_GAP);
                Some(format!("{left}{}{right}", " ".repeat(gap)))
            }
        }
    }

    fn rows(&self, width: usize) -> Vec<(Row, String)> {
        let indent = |align: Alignment, content: &str| {
            let pad = align.left_padding(width, content.chars().count());
            format!("{}{content}", " ".repeat(pad))
        };

        let mut rows: Vec<(Row, String)> = render_block(&self.text)
            .into_iter()
            .map(|line| {
                let pad = self.align.left_padding(width, self.block_width());
                (Row::Block, format!("{}{line}", " ".repeat(pad)))
            })
            .collect();

        if let Some(line) = self.adinfo_line() {
            rows.push((Row::AdInfo, indent(self.align, &line)));
        }
        if let Some(credits) = &self.credits {
            rows.push((Row::Credits, indent(self.align, credits)));
        }

        rows.push((Row::Welcome, String::new()));
        let welcome = format!("~ Welcome {} ~", self.user());
        rows.push((Row::Welcome, indent(Alignment::Center, &welcome)));
        rows.push((Row::Rule, "─".repeat(width)));
        rows
    }

    /// Plain-text banner laid out for a terminal `width` columns wide.
    #[must_use]
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        self.rows(width).into_iter().map(|(_, line)| line).collect()
    }

    fn paint(&self, kind: Row, line: &str) -> String {
        if !self.colors || line.is_empty() {
            return line.to_string();
        }
        match kind {
            Row::Block | Row::Rule => colorize(line, palette::PINK),
            Row::AdInfo => colorize(line, palette::VIOLET),
            Row::Credits => colorize(line, palette::GRAY),
            Row::Welcome => {
                let user = self.user();
                line.replacen(
                    &user,
                    &format!("{}{}{user}{}", palette::BOLD, palette::MAGENTA.fg_ansi(), palette::RESET),
                    1,
                )
            }
        }
    }

    /// Writes the banner laid out for `width` to `out`.
    ///
    /// # Errors
    /// Propagates write failures.
    pub fn write_to(&self, out: &mut dyn Write, width: usize) -> io::Result<()> {
        for (kind, line) in self.rows(width) {
            writeln!(out, "{}", self.paint(kind, &line))?;
        }
        out.flush()
    }

    /// Prints the banner to stdout at the current terminal width.
    ///
    /// # Errors
    /// Fails if clearing the screen or writing to stdout fails.
    pub fn display(&self) -> Result<(), crate::Error> {
        let mut stdout = io::stdout();
        if self.clear {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.write_to(&mut stdout, terminal_width())?;
        Ok(())
    }
}

/// Current terminal width, or [`FALLBACK_WIDTH`] when stdout is not a terminal.
#[must_use]
pub fn terminal_width() -> usize {
    resolve_width(io::stdout().is_terminal(), terminal::size)
}

/// Width to lay the banner out for. `query` is only asked when stdout is a
/// terminal: crossterm can still report the controlling tty's size after
/// stdout has been redirected.
#[must_use]
pub fn resolve_width(
    stdout_is_terminal: bool,
    query: impl FnOnce() -> io::Result<(u16, u16)>,
) -> usize {
    if !stdout_is_terminal {
        return FALLBACK_WIDTH;
    }
    match query() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        _ => FALLBACK_WIDTH,
    }
}
