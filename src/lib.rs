//! `logmagix` - colorful leveled logging for terminal programs.
//!
//! - A [`Logger`] with six severities, a runtime threshold, a closed set of
//!   line styles and pluggable outputs (terminal, size-rotated file)
//! - Batching: buffer lines and emit them together in order
//! - Interactive `critical` and `question` prompts
//! - A threaded spinner ([`Loader`]) and a block-letter banner ([`Home`])
//! - A one-shot version check against a package index ([`Updater`])
//!
//! # Example
//!
//! ```no_run
//! use logmagix::{Level, Loader, Logger};
//!
//! let logger = Logger::builder()
//!     .prefix("app")
//!     .level(Level::Info)
//!     .terminal()
//!         .colors(true)
//!         .done()
//!     .build();
//!
//! logger.info("Application started");
//! logger.debug("hidden below the threshold");
//!
//! let answer = Loader::new("Crunching numbers").run(|| 6 * 7).unwrap();
//! logger.success(&format!("Result: {answer}"));
//! ```
//!
//! # Features
//!
//! - `update` (default): HTTP package-index lookups through `reqwest`

pub mod banner;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod loader;
pub mod logger;
pub mod output;
pub mod update;

pub use banner::Home;
pub use config::Config;
pub use error::Error;
pub use fmt::{Alignment, Color, Elapsed, Transform};
pub use level::Level;
pub use loader::{Loader, LoaderState};
pub use logger::{Log, Logger, LoggerBuilder, Style};
pub use output::{FileOutput, Line, Output, TerminalOutput, format_size, parse_size};
#[cfg(feature = "update")]
pub use update::IndexSource;
pub use update::{StaticSource, Updater, Version, VersionSource};
