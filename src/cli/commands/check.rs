//! The check command
//!
//! Loads the configuration and the matrix, validates, and writes the report.
//! Any load failure aborts before validation runs.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::schema::{Issue, IssueRecord};
use crate::config::{load_config, load_matrix, validate};
use crate::error::{ExitCode, Result};

/// Header line printed before the issue list.
pub const ISSUES_HEADER: &str = "Configuration issues found:";

/// Confirmation line printed when no issues are found.
pub const VALID_MESSAGE: &str = "Configuration is valid according to the compatibility matrix.";

/// Result of a completed check.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    /// Issues in matrix order
    pub issues: Vec<Issue>,
}

impl CheckOutcome {
    /// Returns `true` when no issues were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Report rendering options taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions<'a> {
    /// Output format
    pub format: OutputFormat,
    /// Suppress the confirmation line
    pub quiet: bool,
    /// Configuration path, echoed in JSON reports
    pub config_path: &'a Path,
    /// Matrix path, echoed in JSON reports
    pub matrix_path: &'a Path,
}

impl<'a> From<&'a Cli> for ReportOptions<'a> {
    fn from(cli: &'a Cli) -> Self {
        Self {
            format: cli.format,
            quiet: cli.quiet,
            config_path: &cli.config_file,
            matrix_path: &cli.compatibility_matrix,
        }
    }
}

/// Runs a check and writes the report to stdout.
///
/// # Errors
///
/// Returns an error if either document fails to load or the report cannot
/// be written.
pub fn run(cli: &Cli) -> Result<CheckOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(cli, &mut out)
}

/// Runs a check and writes the report to `out`.
///
/// # Errors
///
/// Returns an error if either document fails to load or the report cannot
/// be written.
pub fn run_with_writer<W: Write>(cli: &Cli, out: &mut W) -> Result<CheckOutcome> {
    tracing::debug!(
        config = %cli.config_file.display(),
        matrix = %cli.compatibility_matrix.display(),
        "checking configuration"
    );

    let config = load_config(&cli.config_file)?;
    let matrix = load_matrix(&cli.compatibility_matrix)?;

    let outcome = CheckOutcome {
        issues: validate(&config, &matrix),
    };

    render_report(&outcome, ReportOptions::from(cli), out)?;
    Ok(outcome)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a Path,
    matrix: &'a Path,
    valid: bool,
    issues: Vec<IssueRecord>,
}

/// Writes the report for `outcome`.
///
/// Human format prints the issue list even under `quiet`, since it is the
/// failure output of the run; only the confirmation line is suppressed.
/// JSON format always prints.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render_report<W: Write>(
    outcome: &CheckOutcome,
    options: ReportOptions<'_>,
    out: &mut W,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            if outcome.is_valid() {
                if !options.quiet {
                    writeln!(out, "{VALID_MESSAGE}")?;
                }
            } else {
                writeln!(out, "{ISSUES_HEADER}")?;
                for issue in &outcome.issues {
                    writeln!(out, "- {issue}")?;
                }
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                config: options.config_path,
                matrix: options.matrix_path,
                valid: outcome.is_valid(),
                issues: outcome.issues.iter().map(IssueRecord::from).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
