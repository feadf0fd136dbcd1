//! Severity levels that gate which messages reach the console and the file sink.

use crate::fmt::{Color, palette};
use std::fmt;
use std::str::FromStr;

/// Message severity. Discriminants are the public ranks; ordering follows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Development-time detail, the most verbose setting.
    #[default]
    Debug = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warning = 3,
    /// A task finished the way it was supposed to.
    Success = 4,
    /// A task failed but the program keeps going.
    Failure = 5,
    /// Operator-facing fatal condition; see `Logger::critical`.
    Critical = 6,
}

impl Level {
    /// Lowercase name, as written in config files and `LOGMAGIX_LOG`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Critical => "critical",
        }
    }

    /// Uppercase label shown between brackets on rendered lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Accent used for the label (and the message, in the color style).
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => palette::BLUE,
            Self::Info => palette::CYAN,
            Self::Warning => palette::YELLOW,
            Self::Success => palette::GREEN,
            Self::Failure | Self::Critical => palette::RED,
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Success,
            Self::Failure,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = crate::Error;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|level| level.rank() == rank)
            .ok_or(crate::Error::InvalidRank(rank))
    }
}

/// An unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "dbg" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "success" | "ok" => Ok(Self::Success),
            "failure" | "error" | "err" => Ok(Self::Failure),
            "critical" | "crit" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
