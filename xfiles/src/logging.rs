//! Logging infrastructure for the xfiles library.
//!
//! The library emits diagnostics through the `log` facade. This module
//! provides the stderr backend for it, with a verbosity chosen from the
//! `XFILES_LOG_MODE` environment variable. Command-line flags are not
//! available for this because every positional token is an operand.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

/// Environment variable selecting the log level.
pub const LOG_MODE_ENV: &str = "XFILES_LOG_MODE";

/// Diagnostic verbosity, one value per accepted `XFILES_LOG_MODE` setting.
///
/// Variants are ordered by how much reaches stderr.
///
/// # Examples
///
/// ```
/// use xfiles::LogLevel;
///
/// let mode: LogLevel = "Verbose".parse().unwrap();
/// assert_eq!(mode, LogLevel::Verbose);
/// assert_eq!(mode.to_string(), "verbose");
/// assert!("loud".parse::<LogLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// `quiet`: stderr stays silent, even for warnings.
    Quiet,
    /// `normal`: warnings, such as dropped lines in the backing file.
    Normal,
    /// `verbose`: also traces store location, loads, saves and counts.
    Verbose,
}

impl LogLevel {
    const ALL: [Self; 3] = [Self::Quiet, Self::Normal, Self::Verbose];

    /// The `XFILES_LOG_MODE` spelling of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// The `log` filter corresponding to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the mode names in any letter case.
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown {LOG_MODE_ENV} value: {s:?}"))
    }
}

/// A stderr backend for the `log` facade.
///
/// Records are written as `LEVEL: message`. Nothing is ever written to
/// stdout, which carries the path list.
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Installs this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Determines the log level from `XFILES_LOG_MODE`.
///
/// Unset or unrecognized values fall back to [`LogLevel::Normal`].
#[must_use]
pub fn log_level_from_env() -> LogLevel {
    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Normal)
}

/// Initializes the global logger from the environment.
///
/// Returns the level in effect. Calling this more than once keeps the
/// first installed logger.
pub fn init_logger() -> LogLevel {
    let level = log_level_from_env();
    if Logger::new(level).install().is_err() {
        log::debug!("logger already installed");
    }
    level
}
