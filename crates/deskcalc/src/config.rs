//! Application configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Write logs to this file
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Key sequence to replay instead of starting the TUI
    pub keys: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
            keys: None,
        }
    }
}

impl AppConfig {
    /// Default log filter
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Set log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Set scripted keys
    #[must_use]
    pub fn with_keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = Some(keys.into());
        self
    }

    /// Returns true when running headless
    #[must_use]
    pub fn is_scripted(&self) -> bool {
        self.keys.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AppConfig::new();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.log_file.is_none());
        assert!(!config.is_scripted());
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::new()
            .with_log_file("/tmp/deskcalc.log")
            .with_log_filter("deskcalc=debug")
            .with_log_format(LogFormat::Json)
            .with_keys("2+3=");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/deskcalc.log")));
        assert_eq!(config.log_filter, "deskcalc=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.is_scripted());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = AppConfig::new().with_keys("1+1=");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"log_format\":\"text\""));
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
