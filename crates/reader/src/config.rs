//! Configuration settings for the reader.
//!
//! Settings come from environment variables or are constructed directly;
//! unparsable values fall back to their defaults.

use nav_history::MAX_HISTORY_LEN;
use speech_rules::DynamicCstr;
use std::env;
use std::path::PathBuf;

/// Domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "default";
/// Style used when none is configured.
pub const DEFAULT_STYLE: &str = "default";

/// Runtime configuration for a [`Reader`](crate::Reader).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Directory with `symbols/` and `functions/` rule files to load at build time
    pub rules_dir: Option<PathBuf>,
    /// Domain of the default lookup constraint
    pub domain: String,
    /// Style of the default lookup constraint
    pub style: String,
    /// Bound on the navigation history, at least 1
    pub history_limit: usize,
}

impl ReaderConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `READER_RULES_DIR`: rule directory (default: none)
    /// - `READER_DOMAIN`: default domain (default: `default`)
    /// - `READER_STYLE`: default style (default: `default`)
    /// - `READER_HISTORY_LIMIT`: history bound (default: 30, minimum 1)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let rules_dir = env::var_os("READER_RULES_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let domain = non_empty_var("READER_DOMAIN").unwrap_or_else(|| DEFAULT_DOMAIN.to_owned());
        let style = non_empty_var("READER_STYLE").unwrap_or_else(|| DEFAULT_STYLE.to_owned());
        let history_limit = env::var("READER_HISTORY_LIMIT")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(MAX_HISTORY_LEN)
            .max(1);
        Self {
            rules_dir,
            domain,
            style,
            history_limit,
        }
    }

    /// The constraint used by [`Reader::speak`](crate::Reader::speak).
    #[inline]
    #[must_use]
    pub fn constraint(&self) -> DynamicCstr {
        DynamicCstr::new(self.domain.as_str(), self.style.as_str())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            rules_dir: None,
            domain: DEFAULT_DOMAIN.to_owned(),
            style: DEFAULT_STYLE.to_owned(),
            history_limit: MAX_HISTORY_LEN,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_owned())
        .filter(|val| !val.is_empty())
}
