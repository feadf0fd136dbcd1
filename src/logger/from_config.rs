//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::output::TerminalOutput;

impl Logger {
    /// Loads the default config file and builds from it. A broken config is
    /// reported and replaced by defaults rather than failing the program.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("Using defaults: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Builds a logger with the console and file outputs the config enables.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let level = config.level().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("{e}, falling back to debug"));
            Level::Debug
        });

        let mut builder = LoggerBuilder::new()
            .level(level)
            .style(config.style())
            .label_case(config.label_case());
        if let Some(prefix) = &config.general.prefix {
            builder = builder.prefix(prefix);
        }

        if config.terminal.enabled {
            builder = builder.output(TerminalOutput::new().colors(config.colors_enabled()));
        }

        if config.file.enabled {
            let path = config.file_path();
            internal::debug("LOGGER", &format!("File output: {}", path.display()));
            builder = builder
                .file(path)
                .max_size(&config.file.max_size)
                .backups(config.file.backups)
                .timestamp_format(&config.file.timestamp_format)
                .done();
        }

        if !config.terminal.enabled && !config.file.enabled {
            internal::warn("LOGGER", "No outputs enabled");
        }

        builder.build()
    }
}
