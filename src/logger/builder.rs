//! Stepwise construction: prefix, threshold and style on the logger itself, and a
//! sub-builder per built-in output so their options don't crowd the main API.

use super::{Inner, Logger, Style};
use crate::fmt::Transform;
use crate::internal;
use crate::level::Level;
use crate::output::{FileOutput, Output, TerminalOutput};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::AtomicU8;

/// Collects settings and outputs; `build` freezes the prefix and style.
pub struct LoggerBuilder {
    pub(super) prefix: Option<String>,
    pub(super) min_level: Level,
    pub(super) style: Style,
    pub(super) label_case: Transform,
    pub(super) report_failures: bool,
    pub(super) outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Everything visible by default: threshold `Debug`, color style, no prefix, no outputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: None,
            min_level: Level::Debug,
            style: Style::Color,
            label_case: Transform::None,
            report_failures: true,
            outputs: Vec::new(),
        }
    }

    /// Bracketed name shown at the start of every line.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Casing applied to level labels (`WARNING` vs `Warning`).
    #[must_use]
    pub const fn label_case(mut self, transform: Transform) -> Self {
        self.label_case = transform;
        self
    }

    /// Sink failures are reported through the internal logger unless silenced here.
    #[must_use]
    pub const fn report_failures(mut self, enabled: bool) -> Self {
        self.report_failures = enabled;
        self
    }

    /// Console output on stdout.
    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    /// Console output to an arbitrary writer.
    #[must_use]
    pub fn terminal_writer(self, writer: impl Write + Send + 'static) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::writer(writer),
        }
    }

    /// Rotating plain-text file at `path`.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(path),
        }
    }

    /// Custom sink.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            prefix: self.prefix,
            style: self.style,
            label_case: self.label_case,
            min_level: AtomicU8::new(self.min_level.rank()),
            report_failures: self.report_failures,
            inner: Mutex::new(Inner {
                outputs: self.outputs,
                ..Inner::default()
            }),
        }
    }

    /// Builds, then runs the updater's one-time check through the new logger.
    #[must_use]
    pub fn build_checked<S: crate::update::VersionSource>(
        self,
        updater: &crate::update::Updater<S>,
    ) -> Logger {
        let logger = self.build();
        updater.check_for_updates(&logger);
        logger
    }
}

/// Console-specific options.
pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    /// Forces colors on or off instead of detecting a terminal.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

/// File-specific options.
pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    /// Rollover threshold in "10M" notation.
    #[must_use]
    pub fn max_size(mut self, size: &str) -> Self {
        self.output = self.output.max_size(size);
        self
    }

    #[must_use]
    pub fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.output = self.output.max_size_bytes(bytes);
        self
    }

    #[must_use]
    pub fn backups(mut self, count: usize) -> Self {
        self.output = self.output.backups(count);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.output = self.output.timestamp_format(format);
        self
    }

    /// Opens the file and writes the session marker. An open failure is reported
    /// and the sink stays attached; it retries on the next write.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        if let Err(e) = self.output.start_session() {
            internal::warn(
                "FILE",
                &format!("Could not open {}: {e}", self.output.path().display()),
            );
        }
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
