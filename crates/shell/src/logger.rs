//! Logger setup for the CLI.

use std::path::Path;

use ftlog::{appender::FileAppender, LevelFilter, LoggerGuard};

/// The verbosity of the log.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Nothing is logged.
    Off,
    /// Only errors.
    Error,
    /// Errors and rejected inputs.
    #[default]
    Warn,
    /// Progress of loading and clustering.
    Info,
    /// Every merge step.
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
        }
    }
}

/// Configures the logger.
///
/// Records go to stderr, or to `log_path` if one is given.
///
/// # Errors
///
/// - If the logger could not be initialized.
pub fn configure(level: LogLevel, log_path: Option<&Path>) -> Result<LoggerGuard, String> {
    let builder = ftlog::Builder::new()
        // global max log level
        .max_log_level(level.into());

    let builder = match log_path {
        Some(path) => builder.root(FileAppender::new(path)),
        // ftlog writes to stderr without a root appender
        None => builder,
    };

    builder.try_init().map_err(|e| e.to_string())
}
