//! Observability module
//!
//! Logging setup for `compatcheck` runs. Validation issues and terminal
//! failures are reported through `tracing` events on stderr.

pub mod logging;

pub use logging::{LOG_LEVEL_ENV, LogFormat, LogLevel, LogSettings, init_logging};
