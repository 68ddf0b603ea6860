//! Document loading
//!
//! Both inputs go through the same pipeline:
//! 1. Format selection (by extension for the config, fixed JSON for the matrix)
//! 2. Read raw file content
//! 3. Strip a UTF-8 BOM
//! 4. Parse (YAML is converted into the JSON value model)
//! 5. Shape check (top level must be a mapping)

use std::path::Path;

use serde_json::Value;

use crate::config::schema::{
    CompatibilityMatrix, ConfigDocument, DocumentFormat, DocumentKind, value_type_name,
};
use crate::error::LoadError;

// ============================================================================
// Public API
// ============================================================================

/// Loads a configuration document, choosing JSON or YAML by file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not `.json`, `.yaml` or `.yml`
/// - The file cannot be read (missing, permission denied, other I/O)
/// - The content does not parse as the selected format
/// - The top level is not a mapping
pub fn load_config(path: &Path) -> Result<ConfigDocument, LoadError> {
    let Some(format) = DocumentFormat::from_path(path) else {
        return Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase()),
        });
    };

    tracing::debug!(path = %path.display(), %format, "loading configuration");
    let content = read_document(path, DocumentKind::Config)?;
    let config = parse_config(&content, format, path)?;
    tracing::debug!(properties = config.len(), "configuration loaded");
    Ok(config)
}

/// Loads a compatibility matrix. The matrix is always parsed as JSON,
/// whatever its extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, is not
/// an object at the top level, or maps a property to something other than
/// a list.
pub fn load_matrix(path: &Path) -> Result<CompatibilityMatrix, LoadError> {
    tracing::debug!(path = %path.display(), "loading compatibility matrix");
    let content = read_document(path, DocumentKind::Matrix)?;
    let matrix = parse_matrix(&content, path)?;
    tracing::debug!(properties = matrix.len(), "compatibility matrix loaded");
    Ok(matrix)
}

/// Parses configuration content in the given format.
///
/// `path` is only used for diagnostics.
///
/// # Errors
///
/// Returns [`LoadError::ParseError`] on malformed content and
/// [`LoadError::NotAMapping`] when the top level is not a mapping.
pub fn parse_config(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<ConfigDocument, LoadError> {
    let content = strip_bom(content);
    let root = match format {
        DocumentFormat::Json => parse_json(content, DocumentKind::Config, path)?,
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| LoadError::ParseError {
                    kind: DocumentKind::Config,
                    path: path.to_path_buf(),
                    format: DocumentFormat::Yaml,
                    line: e.location().map(|l| l.line()),
                    column: e.location().map(|l| l.column()),
                    message: bare_diagnostic(e.to_string()),
                })?;
            yaml_to_json(&yaml)
        }
    };

    match root {
        Value::Object(map) => Ok(map),
        other => Err(LoadError::NotAMapping {
            kind: DocumentKind::Config,
            path: path.to_path_buf(),
            found: value_type_name(&other),
        }),
    }
}

/// Parses compatibility matrix content as JSON.
///
/// `path` is only used for diagnostics.
///
/// # Errors
///
/// Returns [`LoadError::ParseError`] on malformed JSON, and a shape error
/// when the top level is not an object or an entry is not an array.
pub fn parse_matrix(content: &str, path: &Path) -> Result<CompatibilityMatrix, LoadError> {
    let root = parse_json(strip_bom(content), DocumentKind::Matrix, path)?;

    let entries = match root {
        Value::Object(entries) => entries,
        other => {
            return Err(LoadError::NotAMapping {
                kind: DocumentKind::Matrix,
                path: path.to_path_buf(),
                found: value_type_name(&other),
            });
        }
    };

    let mut matrix = CompatibilityMatrix::with_capacity(entries.len());
    for (property, allowed) in entries {
        match allowed {
            Value::Array(values) => {
                if values.is_empty() {
                    tracing::debug!(%property, "matrix entry allows no values");
                }
                matrix.insert(property, values);
            }
            other => {
                return Err(LoadError::AllowedValuesNotAList {
                    path: path.to_path_buf(),
                    property,
                    found: value_type_name(&other),
                });
            }
        }
    }
    Ok(matrix)
}

// ============================================================================
// Helpers
// ============================================================================

fn read_document(path: &Path, kind: DocumentKind) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::from_io(kind, path.to_path_buf(), e))
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn parse_json(content: &str, kind: DocumentKind, path: &Path) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::ParseError {
        kind,
        path: path.to_path_buf(),
        format: DocumentFormat::Json,
        line: Some(e.line()).filter(|&l| l > 0),
        column: Some(e.column()).filter(|&c| c > 0),
        message: bare_diagnostic(e.to_string()),
    })
}

/// Drops the parser's trailing " at line L column C"; the location is kept
/// in separate fields.
fn bare_diagnostic(message: String) -> String {
    const MARKER: &str = " at line ";

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match message.rfind(MARKER) {
        Some(idx)
            if message[idx + MARKER.len()..]
                .split_once(" column ")
                .is_some_and(|(l, c)| is_digits(l) && is_digits(c)) =>
        {
            message[..idx].to_string()
        }
        _ => message,
    }
}

/// Converts a `serde_yaml::Value` to `serde_json::Value`.
///
/// Mapping entries whose key is not a string are dropped, tags are
/// unwrapped, and non-finite floats become `null`.
#[allow(clippy::option_if_let_else)]
fn yaml_to_json(yaml: &serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
            } else {
                Value::Null
            }
        }
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(seq) => Value::Array(seq.iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => {
            let obj: serde_json::Map<String, Value> = map
                .iter()
                .filter_map(|(k, v)| {
                    let Some(key) = k.as_str() else {
                        tracing::debug!(key = ?k, "skipping non-string mapping key");
                        return None;
                    };
                    Some((key.to_string(), yaml_to_json(v)))
                })
                .collect();
            Value::Object(obj)
        }
        Yaml::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

// ============================================================================
// Tests
// ============================================================================
