//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive runs only log when a file is
//! configured. Scripted runs fall back to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::error::{AppError, AppResult};

/// Builds the filter from `RUST_LOG`, falling back to the configured directives
pub fn env_filter(config: &AppConfig) -> AppResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| AppError::logging(format!("bad filter '{}': {e}", config.log_filter))),
    }
}

/// Installs the global subscriber
///
/// Returns false when nothing was installed (interactive run without a log
/// file).
pub fn init(config: &AppConfig) -> AppResult<bool> {
    let filter = env_filter(config)?;

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        install(filter, config.log_format, Mutex::new(file), false)?;
        return Ok(true);
    }

    if config.is_scripted() {
        install(filter, config.log_format, std::io::stderr, true)?;
        return Ok(true);
    }

    Ok(false)
}

fn install<W>(filter: EnvFilter, format: LogFormat, writer: W, ansi: bool) -> AppResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| AppError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_rejects_bad_directive() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = AppConfig::new().with_log_filter("deskcalc=notalevel");
        assert!(matches!(
            env_filter(&config),
            Err(AppError::Logging { .. })
        ));
    }

    #[test]
    fn test_env_filter_accepts_directives() {
        let config = AppConfig::new().with_log_filter("deskcalc=debug,warn");
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_init_interactive_without_file_installs_nothing() {
        assert!(!init(&AppConfig::new()).unwrap());
    }
}
