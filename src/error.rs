//! Unified error type for all logmagix operations.

/// Error type for logmagix operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Level name that doesn't map to any severity.
    InvalidLevel(String),
    /// Numeric rank outside the known severity range.
    InvalidRank(u8),
    /// Loader used out of order (started twice, restarted after stop).
    Loader(String),
    /// Package index request or response handling failed.
    VersionFetch(String),
    /// Version string that isn't dotted numeric.
    InvalidVersion(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidRank(rank) => write!(f, "invalid level rank: {rank} (expected 1-6)"),
            Self::Loader(msg) => write!(f, "loader error: {msg}"),
            Self::VersionFetch(msg) => write!(f, "version fetch failed: {msg}"),
            Self::InvalidVersion(v) => write!(f, "invalid version: {v}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}
