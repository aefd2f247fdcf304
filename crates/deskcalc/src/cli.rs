//! Command-line arguments using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AppConfig, LogFormat};

/// deskcalc: a two-line desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replay a key sequence (e.g. "42+8=") and print the two display lines
    #[arg(short, long, value_name = "SEQ")]
    pub keys: Option<String>,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, overridden by RUST_LOG
    #[arg(long, value_name = "DIRECTIVES", default_value = AppConfig::DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Log line format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormatArg,
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Builds the application configuration from parsed arguments
    #[must_use]
    pub fn to_config(&self) -> AppConfig {
        let mut config = AppConfig::new()
            .with_log_filter(self.log_filter.clone())
            .with_log_format(self.log_format.into());
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(keys) = &self.keys {
            config = config.with_keys(keys.clone());
        }
        config
    }
}
