//! Plain-text file sink with size-based rollover.
//!
//! The file stays open between writes. When a write would push it past the
//! size limit, `app.log` becomes `app.log.1`, older backups shift up by one,
//! and anything past the retained count is deleted.

use super::{Line, Output, format_size, parse_size};
use crate::fmt::strip_ansi;
use crate::internal;

use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rotating file sink configuration and open handle.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    /// Rollover threshold in bytes; 0 disables rotation.
    max_bytes: u64,
    /// Rotated files kept next to the live one.
    backups: usize,
    /// Timestamp format (strftime) prefixed to every line.
    timestamp_format: String,
    file: Option<File>,
    /// Bytes in the live file.
    size: u64,
    session_started: bool,
}

impl FileOutput {
    /// 10 MiB with three backups unless configured otherwise.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            file: None,
            size: 0,
            session_started: false,
        }
    }

    /// Rollover threshold in "10M" notation. Unparseable input keeps the current limit.
    #[must_use]
    pub fn max_size(mut self, size: &str) -> Self {
        match parse_size(size) {
            Some(bytes) => self.max_bytes = bytes,
            None => internal::warn("FILE", &format!("Ignoring invalid max size: {size}")),
        }
        self
    }

    /// Rollover threshold in bytes; 0 disables rotation.
    #[must_use]
    pub const fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_bytes = bytes;
        self
    }

    /// Number of rotated files to keep; 0 truncates the live file instead.
    #[must_use]
    pub const fn backups(mut self, count: usize) -> Self {
        self.backups = count;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `n`th backup: `app.log` -> `app.log.n`.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Opens the file (creating parent directories) and writes the session marker.
    /// Idempotent; later writes retry if this fails.
    ///
    /// # Errors
    /// Directory creation or file open failures.
    pub fn start_session(&mut self) -> Result<(), crate::Error> {
        self.ensure_open()?;
        if !self.session_started {
            self.session_started = true;
            let marker = format!("=== Logging started at {} ===\n", self.stamp(&Local::now()));
            self.append(&marker)?;
        }
        Ok(())
    }

    fn stamp(&self, time: &DateTime<Local>) -> String {
        time.format(&self.timestamp_format).to_string()
    }

    fn ensure_open(&mut self) -> Result<(), crate::Error> {
        if self.file.is_some() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.size = file.metadata().map_or(0, |m| m.len());
        self.file = Some(file);
        Ok(())
    }

    fn needs_rotation(&self, incoming: u64) -> bool {
        self.max_bytes > 0 && self.size > 0 && self.size + incoming > self.max_bytes
    }

    fn rotate(&mut self) -> Result<(), crate::Error> {
        let rotated = self.size;
        // Close before renaming; some platforms refuse to rename open files.
        self.file = None;

        if self.backups == 0 {
            let file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path)?;
            drop(file);
        } else {
            let oldest = self.backup_path(self.backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.backups).rev() {
                let from = self.backup_path(n);
                if from.exists() {
                    fs::rename(&from, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }

        internal::debug(
            "FILE",
            &format!("Rotated {} at {}", self.path.display(), format_size(rotated)),
        );
        self.ensure_open()
    }

    /// Single write of an already newline-terminated entry, rotating first if needed.
    fn append(&mut self, entry: &str) -> Result<(), crate::Error> {
        self.ensure_open()?;
        let len = entry.len() as u64;
        if self.needs_rotation(len) {
            self.rotate()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.write_all(entry.as_bytes())?;
            self.size += len;
        }
        Ok(())
    }

    fn append_stamped(&mut self, time: &DateTime<Local>, text: &str) -> Result<(), crate::Error> {
        if !self.session_started {
            self.start_session()?;
        }
        let mut entry = format!("{} {}", self.stamp(time), strip_ansi(text));
        entry.push('\n');
        self.append(&entry)
    }
}

impl Output for FileOutput {
    fn write(&mut self, line: &Line) -> Result<(), crate::Error> {
        self.append_stamped(&line.time, &line.text)
    }

    fn note(&mut self, text: &str) -> Result<(), crate::Error> {
        self.append_stamped(&Local::now(), text)
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
