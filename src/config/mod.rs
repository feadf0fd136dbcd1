//! TOML configuration loading: path discovery, file I/O and the
//! string-to-enum conversions on top of the serde schema in `structs`.

mod structs;

pub use structs::{FileConfig, GeneralConfig, LoaderConfig, TerminalConfig, UpdateConfig};

use crate::fmt::Transform;
use crate::internal;
use crate::level::Level;
use crate::logger::Style;
use serde::Deserialize;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Every section is `#[serde(default)]`, so an empty file yields a working logger.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
    pub loader: LoaderConfig,
    pub update: UpdateConfig,
}

impl Config {
    /// Loads the user's config from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text directly.
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/logmagix/logmagix.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("logmagix").join("logmagix.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// The configured threshold.
    ///
    /// # Errors
    /// Rejects level names that don't exist.
    pub fn level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse()?)
    }

    #[must_use]
    pub fn style(&self) -> Style {
        Style::parse(&self.general.style)
    }

    #[must_use]
    pub fn label_case(&self) -> Transform {
        Transform::parse(&self.general.label_case)
    }

    /// Resolves the color mode; `auto` asks whether stdout is a terminal.
    #[must_use]
    pub fn colors_enabled(&self) -> bool {
        match self.terminal.colors.to_lowercase().as_str() {
            "always" | "true" | "on" => true,
            "never" | "false" | "off" => false,
            _ => io::stdout().is_terminal(),
        }
    }

    /// File sink path with `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.path).as_ref())
    }
}
