//! Console sink. Colored lines go to stdout by default; when the stream isn't a
//! terminal the escapes are stripped so redirected output stays readable.

use super::{Line, Output};
use crate::fmt::strip_ansi;
use std::io::{self, IsTerminal, Write};

/// Where the console sink sends its bytes.
enum Target {
    Stdout,
    Stderr,
    /// Any writer, e.g. an in-memory buffer.
    Writer(Box<dyn Write + Send>),
}

/// Console sink with automatic color detection.
pub struct TerminalOutput {
    target: Target,
    colors_enabled: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TerminalOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = match self.target {
            Target::Stdout => "stdout",
            Target::Stderr => "stderr",
            Target::Writer(_) => "writer",
        };
        f.debug_struct("TerminalOutput")
            .field("target", &target)
            .field("colors_enabled", &self.colors_enabled)
            .finish()
    }
}

impl TerminalOutput {
    /// Stdout, colored only when stdout is a terminal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::Stdout,
            colors_enabled: io::stdout().is_terminal(),
        }
    }

    /// Diagnostics go to stderr so they don't mix with a program's real output.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
            colors_enabled: io::stderr().is_terminal(),
        }
    }

    /// Arbitrary writer; colors stay on so captured output matches a real terminal.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: Target::Writer(Box::new(writer)),
            colors_enabled: true,
        }
    }

    /// Overrides color detection.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    fn emit(&mut self, text: &str, newline: bool) -> io::Result<()> {
        let text = if self.colors_enabled {
            std::borrow::Cow::Borrowed(text)
        } else {
            strip_ansi(text)
        };
        match &mut self.target {
            Target::Stdout => write_to(&mut io::stdout().lock(), &text, newline),
            Target::Stderr => write_to(&mut io::stderr().lock(), &text, newline),
            Target::Writer(w) => write_to(w, &text, newline),
        }
    }
}

fn write_to(w: &mut dyn Write, text: &str, newline: bool) -> io::Result<()> {
    if newline {
        writeln!(w, "{text}")?;
    } else {
        write!(w, "{text}")?;
    }
    // Prompts and spinner-adjacent lines must show up immediately.
    w.flush()
}

impl Output for TerminalOutput {
    fn write(&mut self, line: &Line) -> Result<(), crate::Error> {
        self.emit(&line.text, true)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), crate::Error> {
        self.emit(text, false)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match &mut self.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
            Target::Writer(w) => w.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}
