//! Engine configuration via `lexis.toml`
//!
//! Every field is optional; an empty file yields the defaults. Values are
//! validated eagerly when loaded from a file or string.

use crate::error::{Error, Result};
use crate::limits::{DEFAULT_REQUEST_WINDOW, DEFAULT_SCORE_BUCKETS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "lexis.toml";

/// Search engine configuration.
///
/// # Example
///
/// ```toml
/// stop_words = ["a", "in", "the"]
/// score_buckets = 100
/// request_window = 1440
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Words excluded from indexing and from queries.
    #[serde(default)]
    pub stop_words: Vec<String>,
    /// Bucket count of the concurrent score map used by parallel ranking.
    #[serde(default = "default_score_buckets")]
    pub score_buckets: usize,
    /// Number of recent requests tracked by the request queue.
    #[serde(default = "default_request_window")]
    pub request_window: usize,
}

fn default_score_buckets() -> usize {
    DEFAULT_SCORE_BUCKETS
}

fn default_request_window() -> usize {
    DEFAULT_REQUEST_WINDOW
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_words: Vec::new(),
            score_buckets: default_score_buckets(),
            request_window: default_request_window(),
        }
    }
}

impl SearchConfig {
    /// Builder: set stop words.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the score map bucket count.
    pub fn with_score_buckets(mut self, buckets: usize) -> Self {
        self.score_buckets = buckets;
        self
    }

    /// Builder: set the request window.
    pub fn with_request_window(mut self, window: usize) -> Self {
        self.request_window = window;
        self
    }

    /// Check numeric settings.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `score_buckets` or `request_window` is zero.
    /// Stop-word validity is checked when a server is built from the config.
    pub fn validate(&self) -> Result<()> {
        if self.score_buckets == 0 {
            return Err(Error::config("score_buckets must be greater than zero"));
        }
        if self.request_window == 0 {
            return Err(Error::config("request_window must be greater than zero"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lexis search configuration
#
# Words excluded from indexing and from queries.
stop_words = []

# Bucket count of the concurrent score map used by parallel ranking (default: 100).
score_buckets = 100

# Number of recent requests tracked by the request queue (default: 1440).
request_window = 1440
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if it
    /// cannot be parsed or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }
}
