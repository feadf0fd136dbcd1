//! Spinner shown beside a status line while a long task runs.
//!
//! `start` spawns one thread that redraws `\r[prefix] [time] [description] <frame>`
//! every interval. `stop` raises the stop flag, wakes and joins the thread, and
//! only then finalizes the line, so nothing is written after `stop` returns.
//! Dropping a running loader stops it, which gives scoped use on every exit path.

use crate::config::LoaderConfig;
use crate::fmt::palette;
use chrono::Local;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Braille frames, one full rotation.
pub const FRAMES: [&str; 8] = ["⢿", "⣻", "⣽", "⣾", "⣷", "⣯", "⣟", "⡿"];

/// End message meaning "just return the cursor to column 0".
pub const CLEAR_END: &str = "\r";

const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);
const MIN_INTERVAL: Duration = Duration::from_millis(1);

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// `Created -> Running -> Stopped`; a stopped loader can't be restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Created,
    Running,
    Stopped,
}

/// What the animation thread needs, cloned out of the loader at start.
struct Frame {
    prefix: Option<String>,
    desc: String,
    time: String,
    colors: bool,
}

impl Frame {
    fn render(&self, glyph: &str) -> String {
        let mut out = String::from("\r");
        if self.colors {
            let frame = palette::PINK.fg_ansi();
            if let Some(prefix) = &self.prefix {
                out.push_str(&format!("{frame}[{}{prefix}{frame}] ", palette::MAGENTA.fg_ansi()));
            }
            out.push_str(&format!(
                "{frame}[{}{}{frame}] [{}{}{}] {glyph}",
                palette::VIOLET.fg_ansi(),
                self.time,
                palette::GREEN.fg_ansi(),
                self.desc,
                palette::RESET,
            ));
        } else {
            if let Some(prefix) = &self.prefix {
                out.push_str(&format!("[{prefix}] "));
            }
            out.push_str(&format!("[{}] [{}] {glyph}", self.time, self.desc));
        }
        out
    }
}

/// Animated progress indicator.
pub struct Loader {
    desc: String,
    prefix: Option<String>,
    end: String,
    interval: Duration,
    frames: Vec<String>,
    colors: bool,
    writer: SharedWriter,
    state: LoaderState,
    done: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    started_at: Option<String>,
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("desc", &self.desc)
            .field("prefix", &self.prefix)
            .field("end", &self.end)
            .field("interval", &self.interval)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new("Loading...")
    }
}

impl Loader {
    /// Stdout, 100 ms frames, line cleared on stop.
    #[must_use]
    pub fn new(desc: impl Into<String>) -> Self {
        Self {
            desc: desc.into(),
            prefix: None,
            end: CLEAR_END.to_string(),
            interval: DEFAULT_INTERVAL,
            frames: FRAMES.iter().map(ToString::to_string).collect(),
            colors: io::stdout().is_terminal(),
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            state: LoaderState::Created,
            done: Arc::new(AtomicBool::new(false)),
            handle: None,
            started_at: None,
        }
    }

    /// Applies interval and prefix defaults from config.
    #[must_use]
    pub fn configure(mut self, config: &LoaderConfig) -> Self {
        self.interval = config.interval();
        if let Some(prefix) = &config.prefix {
            self.prefix = Some(prefix.clone());
        }
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Message printed on its own line when the loader stops; [`CLEAR_END`] prints nothing.
    #[must_use]
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    /// Time between frames, at least one millisecond.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }

    /// Custom frame sequence; an empty list keeps the default.
    #[must_use]
    pub fn frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if !frames.is_empty() {
            self.frames = frames;
        }
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Draws to `writer` instead of stdout.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Arc::new(Mutex::new(Box::new(writer)));
        self
    }

    #[must_use]
    pub const fn state(&self) -> LoaderState {
        self.state
    }

    /// Starts the animation thread.
    ///
    /// # Errors
    /// Fails if the loader already ran, or the thread can't be spawned.
    pub fn start(&mut self) -> Result<&mut Self, crate::Error> {
        match self.state {
            LoaderState::Running => return Err(crate::Error::Loader("already running".into())),
            LoaderState::Stopped => return Err(crate::Error::Loader("already stopped".into())),
            LoaderState::Created => {}
        }

        let time = Local::now().format("%H:%M:%S").to_string();
        let frame = Frame {
            prefix: self.prefix.clone(),
            desc: self.desc.clone(),
            time: time.clone(),
            colors: self.colors,
        };
        let glyphs = self.frames.clone();
        let interval = self.interval;
        let writer = Arc::clone(&self.writer);
        let done = Arc::clone(&self.done);
        done.store(false, Ordering::Release);

        let handle = thread::Builder::new()
            .name("logmagix-loader".into())
            .spawn(move || animate(&frame, &glyphs, interval, &writer, &done))?;

        self.handle = Some(handle);
        self.started_at = Some(time);
        self.state = LoaderState::Running;
        Ok(self)
    }

    /// Consumes and starts; the returned loader stops when dropped.
    ///
    /// # Errors
    /// Same as [`start`](Self::start).
    pub fn started(mut self) -> Result<Self, crate::Error> {
        self.start()?;
        Ok(self)
    }

    /// Stops the animation and finalizes the line. Calling it again is a no-op;
    /// stopping a loader that never started only marks it stopped.
    pub fn stop(&mut self) {
        match self.state {
            LoaderState::Stopped => return,
            LoaderState::Created => {
                self.state = LoaderState::Stopped;
                return;
            }
            LoaderState::Running => {}
        }

        self.done.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
        self.state = LoaderState::Stopped;

        let text = self.finish_text();
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(text.as_bytes());
        let _ = writer.flush();
    }

    fn finish_text(&self) -> String {
        if self.end == CLEAR_END {
            return CLEAR_END.to_string();
        }
        let time = self.started_at.clone().unwrap_or_default();
        let mut line = String::from("\n");
        if self.colors {
            let frame = palette::PINK.fg_ansi();
            if let Some(prefix) = &self.prefix {
                line.push_str(&format!("{frame}[{}{prefix}{frame}] ", palette::MAGENTA.fg_ansi()));
            }
            line.push_str(&format!(
                "{frame}[{}{time}{frame}] {}{}{}",
                palette::VIOLET.fg_ansi(),
                palette::GREEN.fg_ansi(),
                self.end,
                palette::RESET
            ));
        } else {
            if let Some(prefix) = &self.prefix {
                line.push_str(&format!("[{prefix}] "));
            }
            line.push_str(&format!("[{time}] {}", self.end));
        }
        line.push('\n');
        line
    }

    /// Runs `task` with the spinner active. The loader stops when `task`
    /// returns, and also if it panics, since unwinding drops the loader.
    ///
    /// # Errors
    /// Fails only if the loader can't start; `task`'s own result is returned as-is.
    pub fn run<T>(mut self, task: impl FnOnce() -> T) -> Result<T, crate::Error> {
        self.start()?;
        let out = task();
        self.stop();
        Ok(out)
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.stop();
    }
}

fn animate(
    frame: &Frame,
    glyphs: &[String],
    interval: Duration,
    writer: &SharedWriter,
    done: &AtomicBool,
) {
    for glyph in glyphs.iter().cycle() {
        if done.load(Ordering::Acquire) {
            break;
        }
        {
            let mut w = writer.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = w.write_all(frame.render(glyph).as_bytes());
            let _ = w.flush();
        }
        // `stop` unparks, so shutdown doesn't wait out the full interval.
        thread::park_timeout(interval);
    }
}
