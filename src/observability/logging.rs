//! Logging initialization for `compatcheck`.
//!
//! Provides timestamped logging via `tracing` to stderr, in human-readable or
//! JSON form. The level comes from an explicit [`LogSettings`] value built
//! from the CLI flags; `COMPATCHECK_LOG_LEVEL` overrides it when set.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// flag-derived level.
pub const LOG_LEVEL_ENV: &str = "COMPATCHECK_LOG_LEVEL";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with optional ANSI colors.
    #[default]
    Human,
    /// Newline-delimited JSON for machine consumption.
    Json,
}

/// Minimum severity written to the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only (`--quiet`)
    Error,
    /// Default level
    #[default]
    Info,
    /// `-v`
    Debug,
    /// `-vv` and above
    Trace,
}

impl LogLevel {
    /// Derives the level from the `--verbose` count and `--quiet` flag.
    ///
    /// Verbose is checked first: when both are given, verbose wins and quiet
    /// has no effect on the log level.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        match verbose {
            0 if quiet => Self::Error,
            0 => Self::Info,
            1 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the tracing directive string for this level.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Everything the subscriber needs, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    /// Minimum level
    pub level: LogLevel,
    /// Line format
    pub format: LogFormat,
    /// Color choice for human format
    pub color: ColorChoice,
}

/// Initializes the global tracing subscriber.
///
/// If `COMPATCHECK_LOG_LEVEL` is set it takes precedence over
/// `settings.level`.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(settings: LogSettings) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_directive()));

    let show_target = matches!(settings.level, LogLevel::Debug | LogLevel::Trace);

    let use_ansi = match settings.color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    match settings.format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
