//! Where the latest published version comes from.

use serde::Deserialize;

/// Looks up the newest published version of a package.
pub trait VersionSource: Send + Sync {
    /// Raw version string as published.
    ///
    /// # Errors
    /// Any network, status or decoding failure.
    fn latest_version(&self, package: &str) -> Result<String, crate::Error>;
}

/// Fixed answer, for offline use or to pin the check in tests.
#[derive(Debug, Clone)]
pub struct StaticSource(pub Option<String>);

impl VersionSource for StaticSource {
    fn latest_version(&self, package: &str) -> Result<String, crate::Error> {
        self.0
            .clone()
            .ok_or_else(|| crate::Error::VersionFetch(format!("no version known for {package}")))
    }
}

/// `{ "info": { "version": "..." } }`, the PyPI JSON API shape.
#[derive(Debug, Deserialize)]
struct IndexResponse {
    info: IndexInfo,
}

#[derive(Debug, Deserialize)]
struct IndexInfo {
    version: String,
}

/// Extracts `info.version` from a package index JSON document.
///
/// # Errors
/// Fails on malformed JSON or a missing `info.version`.
pub fn parse_index_response(body: &str) -> Result<String, crate::Error> {
    serde_json::from_str::<IndexResponse>(body)
        .map(|response| response.info.version)
        .map_err(|e| crate::Error::VersionFetch(format!("bad index response: {e}")))
}

#[cfg(feature = "update")]
pub use http::IndexSource;

#[cfg(feature = "update")]
mod http {
    use super::VersionSource;
    use crate::config::UpdateConfig;
    use std::time::Duration;

    /// Package index reached over HTTP. `{package}` in the URL template is
    /// replaced with the package name.
    #[derive(Debug, Clone)]
    pub struct IndexSource {
        url_template: String,
        timeout: Duration,
    }

    impl Default for IndexSource {
        fn default() -> Self {
            Self::from_config(&UpdateConfig::default())
        }
    }

    impl IndexSource {
        #[must_use]
        pub fn new(url_template: impl Into<String>, timeout: Duration) -> Self {
            Self {
                url_template: url_template.into(),
                timeout,
            }
        }

        #[must_use]
        pub fn from_config(config: &UpdateConfig) -> Self {
            Self::new(&config.index_url, config.timeout())
        }

        #[must_use]
        pub fn url_for(&self, package: &str) -> String {
            self.url_template.replace("{package}", package)
        }
    }

    fn fetch_error(e: impl std::fmt::Display) -> crate::Error {
        crate::Error::VersionFetch(e.to_string())
    }

    impl VersionSource for IndexSource {
        fn latest_version(&self, package: &str) -> Result<String, crate::Error> {
            let client = reqwest::blocking::Client::builder()
                .timeout(self.timeout)
                .user_agent(concat!("logmagix/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(fetch_error)?;

            let response = client.get(self.url_for(package)).send().map_err(fetch_error)?;
            if !response.status().is_success() {
                return Err(fetch_error(format!("HTTP {}", response.status())));
            }
            let body = response.text().map_err(fetch_error)?;
            super::parse_index_response(&body)
        }
    }
}
