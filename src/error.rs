//! Error types for `compatcheck`
//!
//! Every failure that aborts a run is a variant here. Load failures are
//! reported as `Error: <message>`; shape and output failures are reported as
//! unexpected errors. Both exit with [`ExitCode::FAILURE`].

use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::{DocumentFormat, DocumentKind};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `compatcheck` runs.
///
/// Issues found, load failures, and unexpected failures all share
/// [`ExitCode::FAILURE`]. Argument errors exit through clap with its own
/// usage code.
pub struct ExitCode;

impl ExitCode {
    /// No issues found
    pub const SUCCESS: i32 = 0;

    /// Issues found, or the run could not complete
    pub const FAILURE: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for a `compatcheck` run.
#[derive(Debug, Error)]
pub enum CompatCheckError {
    /// Loading the configuration or the matrix failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The JSON report could not be serialized
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    /// Writing the report to stdout failed
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl CompatCheckError {
    /// Returns `true` when the failure falls outside the anticipated
    /// load-failure taxonomy and should be reported as unexpected.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        match self {
            Self::Load(err) => err.is_unexpected(),
            Self::Report(_) | Self::Output(_) => true,
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        ExitCode::FAILURE
    }
}

// ============================================================================
// Load Errors
// ============================================================================

/// Failures while reading and parsing an input document.
///
/// Every variant names which input failed through its [`DocumentKind`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not exist
    #[error("{kind} not found: {}", path.display())]
    NotFound {
        /// Which input document
        kind: DocumentKind,
        /// Path that was opened
        path: PathBuf,
    },

    /// The process may not read the path
    #[error("permission denied when trying to read {kind}: {}", path.display())]
    PermissionDenied {
        /// Which input document
        kind: DocumentKind,
        /// Path that was opened
        path: PathBuf,
    },

    /// Any other I/O failure while reading
    #[error("OS error when reading {kind}: {}. {source}", path.display())]
    Io {
        /// Which input document
        kind: DocumentKind,
        /// Path that was opened
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The configuration file extension selects no known format
    #[error(
        "unsupported file type for {}: must be JSON (.json) or YAML (.yaml, .yml)",
        path.display()
    )]
    UnsupportedFormat {
        /// Path whose extension was rejected
        path: PathBuf,
        /// The extension found, lowercased, if any
        extension: Option<String>,
    },

    /// The content is not valid for the selected format
    #[error(
        "error decoding {format} in {kind} {}{}: {message}",
        path.display(),
        location_suffix(*line, *column)
    )]
    ParseError {
        /// Which input document
        kind: DocumentKind,
        /// Path of the document
        path: PathBuf,
        /// Format the content was parsed as
        format: DocumentFormat,
        /// Line of the error (1-based), if the parser reports it
        line: Option<usize>,
        /// Column of the error (1-based), if the parser reports it
        column: Option<usize>,
        /// Parser diagnostic
        message: String,
    },

    /// The top level of the document is not a mapping
    #[error("{kind} {} must contain a mapping at the top level, found {found}", path.display())]
    NotAMapping {
        /// Which input document
        kind: DocumentKind,
        /// Path of the document
        path: PathBuf,
        /// Name of the value type found instead
        found: &'static str,
    },

    /// A matrix entry maps to something other than a list of values
    #[error(
        "allowed values for property '{property}' in {} must be a list, found {found}",
        path.display()
    )]
    AllowedValuesNotAList {
        /// Path of the matrix
        path: PathBuf,
        /// Property whose entry is malformed
        property: String,
        /// Name of the value type found instead
        found: &'static str,
    },
}

impl LoadError {
    /// Builds a load error from an I/O failure, classifying it by kind.
    #[must_use]
    pub fn from_io(kind: DocumentKind, path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { kind, path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { kind, path },
            _ => Self::Io { kind, path, source },
        }
    }

    /// Returns `true` for document-shape failures, which fall outside the
    /// read/parse taxonomy.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::NotAMapping { .. } | Self::AllowedValuesNotAList { .. }
        )
    }
}

fn location_suffix(line: Option<usize>, column: Option<usize>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!(" (line {l}, column {c})"),
        (Some(l), None) => format!(" (line {l})"),
        _ => String::new(),
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `compatcheck` operations.
pub type Result<T> = std::result::Result<T, CompatCheckError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::FAILURE, 1);
    }

    #[test]
    fn test_from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = LoadError::from_io(DocumentKind::Config, PathBuf::from("app.json"), io_err);
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "configuration file not found: app.json");
    }

    #[test]
    fn test_from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = LoadError::from_io(DocumentKind::Matrix, PathBuf::from("m.json"), io_err);
        assert!(matches!(err, LoadError::PermissionDenied { .. }));
        assert!(err.to_string().contains("compatibility matrix file"));
    }

    #[test]
    fn test_from_io_other_keeps_cause() {
        let io_err = std::io::Error::other("disk on fire");
        let err = LoadError::from_io(DocumentKind::Config, PathBuf::from("a.yaml"), io_err);
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_parse_error_display_with_location() {
        let err = LoadError::ParseError {
            kind: DocumentKind::Config,
            path: PathBuf::from("config.json"),
            format: DocumentFormat::Json,
            line: Some(3),
            column: Some(7),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error decoding JSON in configuration file config.json (line 3, column 7): expected value"
        );
    }

    #[test]
    fn test_parse_error_display_without_location() {
        let err = LoadError::ParseError {
            kind: DocumentKind::Matrix,
            path: PathBuf::from("matrix.json"),
            format: DocumentFormat::Json,
            line: None,
            column: None,
            message: "EOF".to_string(),
        };
        assert!(!err.to_string().contains("line"));
    }

    #[test]
    fn test_shape_errors_are_unexpected() {
        let err = LoadError::NotAMapping {
            kind: DocumentKind::Matrix,
            path: PathBuf::from("m.json"),
            found: "array",
        };
        assert!(err.is_unexpected());
        let top: CompatCheckError = err.into();
        assert!(top.is_unexpected());
        assert_eq!(top.exit_code(), ExitCode::FAILURE);
    }

    #[test]
    fn test_read_errors_are_expected() {
        let err: CompatCheckError = LoadError::UnsupportedFormat {
            path: PathBuf::from("config.toml"),
            extension: Some("toml".to_string()),
        }
        .into();
        assert!(!err.is_unexpected());
        assert!(err.to_string().contains("unsupported file type"));
    }
}
