//! CLI argument definitions
//!
//! Clap derive structs for `compatcheck` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Validates configuration properties against a known matrix of compatible
/// values.
#[derive(Parser, Debug)]
#[command(name = "compatcheck", author, version, about)]
pub struct Cli {
    /// Path to the configuration file to validate (YAML or JSON).
    pub config_file: PathBuf,

    /// Path to the JSON file containing the compatibility matrix.
    pub compatibility_matrix: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except for errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Report format written to stdout.
    #[arg(short, long, default_value = "human", env = "COMPATCHECK_FORMAT")]
    pub format: OutputFormat,

    /// Log line format written to stderr.
    #[arg(long, default_value = "human", env = "COMPATCHECK_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "COMPATCHECK_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Value Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
