//! logmagix's own diagnostic logger: sink failures, config fallbacks and update
//! check problems are reported through it, on stderr, in the simple style.
//!
//! Built lazily on first use through `OnceLock`, so library code can report
//! from anywhere without an init call. `LOGMAGIX_LOG` sets the threshold
//! (default `warning`).

use crate::level::Level;
use crate::logger::{Logger, Style};
use crate::output::TerminalOutput;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Environment variable holding the internal threshold.
pub const LEVEL_ENV: &str = "LOGMAGIX_LOG";

fn logger() -> &'static Logger {
    INTERNAL_LOGGER.get_or_init(|| {
        let level = std::env::var(LEVEL_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(Level::Warning);
        // Never report its own failures: that would recurse into this logger.
        Logger::builder()
            .prefix("logmagix")
            .level(level)
            .style(Style::Simple)
            .report_failures(false)
            .output(TerminalOutput::stderr())
            .build()
    })
}

/// Overrides the threshold chosen from the environment.
pub fn set_level(level: Level) {
    logger().set_min_level(level);
}

fn log(level: Level, scope: &str, msg: &str) {
    logger().log(level, &format!("{scope}: {msg}"), None);
}

/// File creation, rotation and config discovery details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Recoverable problems: a sink that failed, a version that couldn't be fetched.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}
