//! Market-data API configuration.
//!
//! The configuration is read once at startup from a small JSON file:
//!
//! ```json
//! { "api_key": "...", "base_url": "https://financialmodelingprep.com/api/v3", "timeout_secs": 10 }
//! ```
//!
//! Every field is optional in the file. The `STOCK_REPORT_API_KEY` environment variable
//! takes precedence over the file's key, so the key can stay out of version control.
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use log::debug;
use report_common::{ReportError, Result};
use serde::Deserialize;

/// Environment variable overriding `api_key`.
pub const API_KEY_ENV: &str = "STOCK_REPORT_API_KEY";
/// Default market-data endpoint.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for [`crate::http::HttpQuoteSource`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// API key sent with every request.
    pub api_key: Option<String>,
    /// Base URL of the market-data API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FeedConfig {
    /// Load the file at `path` and apply the environment override.
    ///
    /// A missing file is not an error: the defaults are used and the key may still come
    /// from the environment. A file that exists but is not valid JSON is.
    pub fn load(path: &Path) -> Result<Self> {
        let config = match File::open(path) {
            Ok(file) => {
                debug!("Reading feed configuration from {}", path.display());
                serde_json::from_reader(BufReader::new(file))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No configuration file at {}, using defaults", path.display());
                FeedConfig::default()
            }
            Err(e) => return Err(ReportError::Io(e)),
        };
        Ok(config.with_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Replace the key with `key` when it is a non-blank value.
    pub fn with_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// The API key, or a configuration error if none was provided.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ReportError::Config(format!(
                    "API key not found in the configuration file or {}",
                    API_KEY_ENV
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: FeedConfig = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_key_is_config_error() {
        let config = FeedConfig::default();
        assert!(matches!(config.require_api_key(), Err(ReportError::Config(_))));

        let blank = FeedConfig {
            api_key: Some("   ".to_string()),
            ..FeedConfig::default()
        };
        assert!(matches!(blank.require_api_key(), Err(ReportError::Config(_))));
    }

    #[test]
    fn override_replaces_file_key() {
        let config = FeedConfig {
            api_key: Some("from-file".to_string()),
            ..FeedConfig::default()
        };
        assert_eq!(
            config.clone().with_key_override(Some("from-env".to_string())).api_key.as_deref(),
            Some("from-env")
        );
        assert_eq!(
            config.clone().with_key_override(Some("".to_string())).api_key.as_deref(),
            Some("from-file")
        );
        assert_eq!(config.with_key_override(None).require_api_key().unwrap(), "from-file");
    }

    #[test]
    fn loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_key": "k", "timeout_secs": 3}}"#).unwrap();

        let config = FeedConfig::load(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert!(config.api_key.is_some());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FeedConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "api_key = nope").unwrap();
        assert!(matches!(FeedConfig::load(file.path()), Err(ReportError::SerdeJson(_))));
    }
}
