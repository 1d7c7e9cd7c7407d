//! Logging setup for the mapper.
//!
//! All diagnostics go through the `log` facade and are written to stderr by
//! `env_logger`. Stdout is reserved for emitted pairs.

use log::LevelFilter;
use std::io::Write;

/// Logging levels, ordered by verbosity.
/// Higher values indicate more verbose logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only fatal errors
    Fatal = -1,
    /// Warning level - indicates potential issues
    Warning = 0,
    /// Information level - run summary and resolved configuration
    Info = 1,
    /// Debug level - progress messages
    Debug = 2,
}

impl From<i32> for LogLevel {
    fn from(value: i32) -> Self {
        match value {
            i if i < 0 => LogLevel::Fatal,
            0 => LogLevel::Warning,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Fatal => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// Initializes the stderr logger.
///
/// `RUST_LOG` takes precedence when set; otherwise `verbosity` picks the
/// level (-1: errors, 0: warnings, 1: info, 2+: debug). Calling this more
/// than once is harmless.
pub fn init_logging(verbosity: i32) {
    let level: LevelFilter = LogLevel::from(verbosity).into();

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[bagging-mapper] [{}] {}",
                record.level(),
                record.args()
            )
        });

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // Ignore the error when a logger is already installed
    let _ = builder.try_init();
}
