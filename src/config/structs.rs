//! Configuration struct definitions.

use serde::Deserialize;
use std::time::Duration;

/// Threshold, prefix and layout shared by every output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Bracketed name at the start of each line.
    pub prefix: Option<String>,
    /// Line layout (color, simple).
    pub style: String,
    /// Label casing (none, uppercase, lowercase, capitalize).
    pub label_case: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            prefix: None,
            style: "color".to_string(),
            label_case: "none".to_string(),
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable console output.
    pub enabled: bool,
    /// Color mode (auto, always, never).
    pub colors: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: "auto".to_string(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the file sink.
    pub enabled: bool,
    /// Log file path; `~` is expanded.
    pub path: String,
    /// Rollover size (e.g., "10M").
    pub max_size: String,
    /// Rotated files to keep.
    pub backups: usize,
    /// Timestamp format.
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "logmagix").map_or_else(
            || "logs/logmagix.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("logmagix.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            path,
            max_size: "10M".to_string(),
            backups: 3,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// Spinner defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Milliseconds between frames.
    pub interval_ms: u64,
    /// Prefix shown before the spinner's timestamp.
    pub prefix: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            prefix: None,
        }
    }
}

impl LoaderConfig {
    /// Frame interval, never below one millisecond.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

/// Update check configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Check for a newer release at startup.
    pub enabled: bool,
    /// Package name on the index.
    pub package: Option<String>,
    /// Index URL template; `{package}` is replaced.
    pub index_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Upgrade command shown to the user; `{package}` and `{version}` are replaced.
    pub install_command: String,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            package: None,
            index_url: "https://pypi.org/pypi/{package}/json".to_string(),
            timeout_secs: 5,
            install_command: crate::update::DEFAULT_INSTALL_COMMAND.to_string(),
        }
    }
}

impl UpdateConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
