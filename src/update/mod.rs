//! Version check against a package index.
//!
//! The remote version is fetched lazily, once per [`Updater`], and any failure
//! simply means "unknown": it is reported as a warning and never raised.
//! Nothing is installed; [`Updater::install_hint`] returns the command a user
//! would run.

mod source;
mod version;

#[cfg(feature = "update")]
pub use source::IndexSource;
pub use source::{StaticSource, VersionSource, parse_index_response};
pub use version::Version;

use crate::internal;
use crate::logger::Log;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) const DEFAULT_INSTALL_COMMAND: &str = "cargo install {package} --version {version}";

/// Compares the running version of a package with the newest published one.
///
/// Create one per process and pass it where it's needed; repeated
/// [`check_for_updates`](Self::check_for_updates) calls are no-ops.
#[derive(Debug)]
pub struct Updater<S: VersionSource> {
    package: String,
    current: String,
    install_command: String,
    source: S,
    remote: OnceLock<Option<Version>>,
    checked: AtomicBool,
}

impl<S: VersionSource> Updater<S> {
    /// Current version defaults to this crate's own version.
    #[must_use]
    pub fn new(package: impl Into<String>, source: S) -> Self {
        Self {
            package: package.into(),
            current: env!("CARGO_PKG_VERSION").to_string(),
            install_command: DEFAULT_INSTALL_COMMAND.to_string(),
            source,
            remote: OnceLock::new(),
            checked: AtomicBool::new(false),
        }
    }

    /// Version of the running program, for applications checking their own package.
    #[must_use]
    pub fn current(mut self, version: impl Into<String>) -> Self {
        self.current = version.into();
        self
    }

    /// `{package}` and `{version}` are substituted in [`install_hint`](Self::install_hint).
    #[must_use]
    pub fn install_command(mut self, template: impl Into<String>) -> Self {
        self.install_command = template.into();
        self
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The running version, if it parses.
    #[must_use]
    pub fn current_version(&self) -> Option<Version> {
        self.current.parse().ok()
    }

    /// Newest published version; fetched on first call only.
    pub fn remote_version(&self) -> Option<&Version> {
        self.remote
            .get_or_init(|| {
                let fetched = self
                    .source
                    .latest_version(&self.package)
                    .and_then(|raw| raw.parse::<Version>());
                match fetched {
                    Ok(version) => {
                        internal::debug("UPDATE", &format!("{} {version} published", self.package));
                        Some(version)
                    }
                    Err(e) => {
                        internal::warn("UPDATE", &format!("Failed to fetch version of {}: {e}", self.package));
                        None
                    }
                }
            })
            .as_ref()
    }

    /// True only when both versions are known and the published one is newer.
    pub fn update_available(&self) -> bool {
        match (self.current_version(), self.remote_version()) {
            (Some(current), Some(remote)) => *remote > current,
            _ => false,
        }
    }

    /// Upgrade command for the published version, when an update exists.
    pub fn install_hint(&self) -> Option<String> {
        if !self.update_available() {
            return None;
        }
        let version = self.remote_version()?;
        Some(
            self.install_command
                .replace("{package}", &self.package)
                .replace("{version}", &version.to_string()),
        )
    }

    /// Whether [`check_for_updates`](Self::check_for_updates) already ran.
    pub fn checked(&self) -> bool {
        self.checked.load(Ordering::Acquire)
    }

    /// Runs the comparison once and reports the outcome through `logger`.
    /// Later calls return immediately.
    pub fn check_for_updates(&self, logger: &dyn Log) {
        if self.checked.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Some(hint) = self.install_hint() {
            let remote = self.remote_version().map(ToString::to_string).unwrap_or_default();
            logger.warning(&format!(
                "A new version of {} is available: {} -> {remote}",
                self.package, self.current
            ));
            logger.info(&format!("Update with: {hint}"));
        } else if self.remote_version().is_some() {
            logger.debug(&format!("Already running latest version ({})", self.current));
        }
    }
}

#[cfg(feature = "update")]
impl Updater<IndexSource> {
    /// An HTTP-backed updater, or `None` when checks are disabled or no package is named.
    #[must_use]
    pub fn from_config(config: &crate::config::UpdateConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let Some(package) = &config.package else {
            internal::warn("UPDATE", "Update check enabled without a package name");
            return None;
        };
        Some(Self::new(package, IndexSource::from_config(config)).install_command(&config.install_command))
    }
}
