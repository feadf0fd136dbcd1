//! The leveled logger. Each record is filtered against the threshold, rendered
//! once in the configured style, then either buffered (batch mode) or fanned out
//! to every output. One mutex per logger serializes the outputs and the buffer,
//! so lines from concurrent threads never interleave mid-line.

mod builder;
mod from_config;
mod style;

pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};
pub use style::Style;

use crate::fmt::{Elapsed, Transform, palette};
use crate::internal;
use crate::level::Level;
use crate::output::{Line, Output};
use chrono::Local;
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use style::Entry;

/// Everything the emit path touches, behind the logger's single lock.
#[derive(Default)]
struct Inner {
    outputs: Vec<Box<dyn Output>>,
    pending: Vec<Line>,
    batching: bool,
}

/// A sink that failed, kept until the lock is released so reporting it can't deadlock.
type Failure = (&'static str, crate::Error);

impl Inner {
    fn write_all(&mut self, line: &Line) -> Vec<Failure> {
        let mut failures = Vec::new();
        for output in &mut self.outputs {
            if let Err(e) = output.write(line) {
                failures.push((output.name(), e));
            }
        }
        failures
    }

    fn prompt_all(&mut self, text: &str) -> Vec<Failure> {
        let mut failures = Vec::new();
        for output in &mut self.outputs {
            if let Err(e) = output.prompt(text) {
                failures.push((output.name(), e));
            }
        }
        failures
    }

    fn note_all(&mut self, text: &str) -> Vec<Failure> {
        let mut failures = Vec::new();
        for output in &mut self.outputs {
            if let Err(e) = output.note(text) {
                failures.push((output.name(), e));
            }
        }
        failures
    }

    fn flush_all(&mut self) -> Vec<Failure> {
        let mut failures = Vec::new();
        for output in &mut self.outputs {
            if let Err(e) = output.flush() {
                failures.push((output.name(), e));
            }
        }
        failures
    }
}

/// Leveled logger with pluggable outputs. Share it across threads with `Arc`.
pub struct Logger {
    prefix: Option<String>,
    style: Style,
    label_case: Transform,
    min_level: AtomicU8,
    /// The internal diagnostics logger turns this off so it never reports on itself.
    report_failures: bool,
    inner: Mutex<Inner>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().terminal().done().build()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("style", &self.style)
            .field("min_level", &self.min_level())
            .field("outputs", &self.output_count())
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A poisoned lock only means another thread panicked mid-write; the sinks are still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn report(&self, failures: Vec<Failure>) {
        if !self.report_failures {
            return;
        }
        for (name, e) in failures {
            internal::warn("LOGGER", &format!("{name} output failed: {e}"));
        }
    }

    fn render(&self, level: Level, label: &str, msg: &str, elapsed: Option<Elapsed>) -> Line {
        let time = Local::now();
        let label = self.label_case.apply(label);
        let entry = Entry {
            level,
            label: &label,
            message: msg,
            elapsed,
            time: &time,
        };
        let text = self.style.render(self.prefix.as_deref(), &entry);
        Line { level, time, text }
    }

    /// Buffers in batch mode, otherwise writes to every output.
    fn dispatch(&self, line: Line) {
        let failures = {
            let mut inner = self.lock();
            if inner.batching {
                inner.pending.push(line);
                return;
            }
            inner.write_all(&line)
        };
        self.report(failures);
    }

    /// Core emit. Messages below the threshold are dropped before anything is
    /// rendered or buffered.
    pub fn log(&self, level: Level, msg: &str, elapsed: Option<Elapsed>) {
        if level < self.min_level() {
            return;
        }
        self.dispatch(self.render(level, level.label(), msg, elapsed));
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg, None);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg, None);
    }

    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg, None);
    }

    pub fn success(&self, msg: &str) {
        self.log(Level::Success, msg, None);
    }

    pub fn failure(&self, msg: &str) {
        self.log(Level::Failure, msg, None);
    }

    /// `debug` with an ` In {secs}s` suffix.
    pub fn debug_timed(&self, msg: &str, elapsed: Elapsed) {
        self.log(Level::Debug, msg, Some(elapsed));
    }

    pub fn info_timed(&self, msg: &str, elapsed: Elapsed) {
        self.log(Level::Info, msg, Some(elapsed));
    }

    pub fn warning_timed(&self, msg: &str, elapsed: Elapsed) {
        self.log(Level::Warning, msg, Some(elapsed));
    }

    pub fn success_timed(&self, msg: &str, elapsed: Elapsed) {
        self.log(Level::Success, msg, Some(elapsed));
    }

    pub fn failure_timed(&self, msg: &str, elapsed: Elapsed) {
        self.log(Level::Failure, msg, Some(elapsed));
    }

    /// A line with a caller-chosen label in place of the level name (a speaker,
    /// a subsystem). Filtered and colored as `Info`.
    pub fn message(&self, label: &str, msg: &str, elapsed: Option<Elapsed>) {
        if Level::Info < self.min_level() {
            return;
        }
        self.dispatch(self.render(Level::Info, label, msg, elapsed));
    }

    /// Logs `msg` regardless of the threshold, waits for the operator to press
    /// Enter, marks the file sink, and exits the process with `exit_code`.
    pub fn critical(&self, msg: &str, exit_code: i32) -> ! {
        self.acknowledge_critical(msg, exit_code, &mut io::stdin().lock());
        std::process::exit(exit_code)
    }

    /// Everything [`critical`](Self::critical) does short of exiting, reading the
    /// acknowledgement from `input`. Pending batch lines are emitted first.
    pub fn acknowledge_critical(&self, msg: &str, exit_code: i32, input: &mut dyn BufRead) {
        self.flush();
        let line = self.render(Level::Critical, Level::Critical.label(), msg, None);
        let failures = {
            let mut inner = self.lock();
            let mut failures = inner.write_all(&line);
            failures.extend(inner.prompt_all("Press Enter to exit..."));
            failures
        };
        self.report(failures);

        // Content is irrelevant; EOF counts as an acknowledgement too.
        let mut ack = String::new();
        let _ = input.read_line(&mut ack);

        let failures = {
            let mut inner = self.lock();
            let mut failures =
                inner.note_all(&format!("=== Logging terminated (exit code {exit_code}) ==="));
            failures.extend(inner.flush_all());
            failures
        };
        self.report(failures);
    }

    /// Shows `prompt` on the console (no newline), reads one line from stdin and
    /// returns it verbatim apart from the line terminator.
    ///
    /// # Errors
    /// Fails if stdin can't be read.
    pub fn question(&self, prompt: &str) -> Result<String, crate::Error> {
        self.question_from(prompt, &mut io::stdin().lock())
    }

    /// [`question`](Self::question) with an explicit input source.
    ///
    /// # Errors
    /// Fails if `input` can't be read.
    pub fn question_from(&self, prompt: &str, input: &mut dyn BufRead) -> Result<String, crate::Error> {
        let mut text = self.render(Level::Info, "QUESTION", prompt, None).text;
        text.push(' ');
        if self.style == Style::Color {
            text.push_str(&palette::PINK.fg_ansi());
        }
        let failures = self.lock().prompt_all(&text);
        self.report(failures);

        let mut answer = String::new();
        let read = input.read_line(&mut answer);
        // Colored prompts leave the answer color active until reset.
        if self.style == Style::Color {
            let failures = self.lock().prompt_all(palette::RESET);
            self.report(failures);
        }
        read?;

        if answer.ends_with('\n') {
            answer.pop();
            if answer.ends_with('\r') {
                answer.pop();
            }
        }

        let failures = self
            .lock()
            .note_all(&format!("Question: {prompt} | Answer: {answer}"));
        self.report(failures);
        Ok(answer)
    }

    /// Changes the threshold for every later call. Lines already buffered stay buffered.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level.rank(), Ordering::Relaxed);
    }

    /// Threshold from a level name such as `"warning"`.
    ///
    /// # Errors
    /// Rejects names that aren't a known level; the threshold is left unchanged.
    pub fn set_min_level_str(&self, level: &str) -> Result<(), crate::Error> {
        let level: Level = level.parse()?;
        self.set_min_level(level);
        Ok(())
    }

    /// Threshold from a numeric rank (1 = debug ... 6 = critical).
    ///
    /// # Errors
    /// Rejects ranks outside 1..=6; the threshold is left unchanged.
    pub fn set_min_level_rank(&self, rank: u8) -> Result<(), crate::Error> {
        self.set_min_level(Level::try_from(rank)?);
        Ok(())
    }

    #[must_use]
    pub fn min_level(&self) -> Level {
        Level::try_from(self.min_level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Starts buffering; anything left from an earlier unflushed batch is discarded.
    pub fn batch(&self) {
        let mut inner = self.lock();
        inner.pending.clear();
        inner.batching = true;
    }

    /// Emits buffered lines in the order they were logged and leaves batch mode.
    /// Does nothing when not batching.
    pub fn flush(&self) {
        let failures = {
            let mut inner = self.lock();
            if !inner.batching {
                return;
            }
            inner.batching = false;
            let pending = std::mem::take(&mut inner.pending);
            pending
                .iter()
                .flat_map(|line| inner.write_all(line))
                .collect::<Vec<_>>()
        };
        self.report(failures);
    }

    #[must_use]
    pub fn is_batching(&self) -> bool {
        self.lock().batching
    }

    /// Lines waiting for [`flush`](Self::flush).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Flushes every output's own buffers (not the batch buffer).
    ///
    /// # Errors
    /// Returns the first output error.
    pub fn sync(&self) -> Result<(), crate::Error> {
        let failures = self.lock().flush_all();
        match failures.into_iter().next() {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.lock().outputs.len()
    }
}

/// What a logger can do, independent of its style. Code that only needs to emit
/// can take `&dyn Log`.
pub trait Log: Send + Sync {
    fn log(&self, level: Level, msg: &str, elapsed: Option<Elapsed>);
    fn set_min_level(&self, level: Level);
    fn min_level(&self) -> Level;
    fn batch(&self);
    fn flush(&self);

    fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg, None);
    }

    fn info(&self, msg: &str) {
        self.log(Level::Info, msg, None);
    }

    fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg, None);
    }

    fn success(&self, msg: &str) {
        self.log(Level::Success, msg, None);
    }

    fn failure(&self, msg: &str) {
        self.log(Level::Failure, msg, None);
    }
}

impl Log for Logger {
    fn log(&self, level: Level, msg: &str, elapsed: Option<Elapsed>) {
        Self::log(self, level, msg, elapsed);
    }

    fn set_min_level(&self, level: Level) {
        Self::set_min_level(self, level);
    }

    fn min_level(&self) -> Level {
        Self::min_level(self)
    }

    fn batch(&self) {
        Self::batch(self);
    }

    fn flush(&self) {
        Self::flush(self);
    }
}
