//! Console and file are the two built-in sinks; the `Output` trait lets callers
//! add their own (test doubles, in-memory buffers) without touching the logger.

mod file;
mod size;
mod terminal;

pub use file::FileOutput;
pub use size::{format_size, parse_size};
pub use terminal::TerminalOutput;

use crate::level::Level;
use chrono::{DateTime, Local};

/// One rendered log line. `text` carries the colorized rendering; sinks that
/// can't show color strip it themselves. Batch mode buffers these, so the
/// timestamp and elapsed suffix are fixed at log time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: Level,
    pub time: DateTime<Local>,
    pub text: String,
}

/// Every sink is driven from behind the logger's mutex, so `&mut self` is safe
/// and `Send` is all that's required to share the logger across threads.
pub trait Output: Send {
    /// Writes one line followed by a newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&mut self, line: &Line) -> Result<(), crate::Error>;

    /// Interactive text that must stay on the current line (questions, acknowledgements).
    /// Only console-like sinks show it.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn prompt(&mut self, _text: &str) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Bookkeeping lines for persistent sinks only (question transcripts, termination marker).
    ///
    /// # Errors
    /// I/O errors from the underlying file.
    fn note(&mut self, _text: &str) -> Result<(), crate::Error> {
        Ok(())
    }

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;

    /// Short name used when reporting a failing sink.
    fn name(&self) -> &'static str {
        "output"
    }
}
