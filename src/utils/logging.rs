//! Logging setup.
//!
//! The library itself only emits records through the `log` facade. This
//! module installs an `env_logger` backend configured from a
//! [`LoggingConfig`] for binaries and tests that want output.
//!
//! Records never carry secret material: phrases, entropy and seeds are
//! reported by size, count or position only.

use crate::types::MnemonicConfig;
use crate::{MnemonicError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(MnemonicError::Config(format!("Unknown log level: {}", other))),
        }
    }
}

/// Logging configuration
///
/// Records are written to stderr as `<millis> [LEVEL] module: message`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// Configuration for the given level.
    pub fn with_level(level: LogLevel) -> Self {
        Self { level }
    }
}

impl From<&MnemonicConfig> for LoggingConfig {
    fn from(config: &MnemonicConfig) -> Self {
        Self::with_level(config.log_level.unwrap_or_default())
    }
}

/// Install the global logger.
///
/// Returns `Ok(false)` when a logger was already installed, which happens
/// whenever `init` runs more than once per process.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level.into());

    builder.format(|buf, record| {
        write!(buf, "{} [{}]", buf.timestamp_millis(), record.level())?;
        if let Some(module_path) = record.module_path() {
            write!(buf, " {}", module_path)?;
        }
        writeln!(buf, ": {}", record.args())
    });

    match builder.try_init() {
        Ok(()) => {
            log::info!("Logger initialized with level: {}", config.level);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
