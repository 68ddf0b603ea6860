//! Document and issue types shared by the loaders and the validator.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Documents
// ============================================================================

/// A loaded configuration document: property name to value.
///
/// Keys keep the order they had in the source file.
pub type ConfigDocument = serde_json::Map<String, Value>;

/// A loaded compatibility matrix: property name to its allowed values.
///
/// Iteration follows the order of properties in the matrix file, which makes
/// the issue sequence reproducible for a given file.
pub type CompatibilityMatrix = IndexMap<String, Vec<Value>>;

/// Which input a document was loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The configuration under validation
    Config,
    /// The compatibility matrix
    Matrix,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("configuration file"),
            Self::Matrix => f.write_str("compatibility matrix file"),
        }
    }
}

/// Structured-data format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON
    Json,
    /// YAML (1.2 core schema, implicit scalar typing)
    Yaml,
}

impl DocumentFormat {
    /// Selects a format from a path's extension, case-insensitively.
    ///
    /// Returns `None` for any extension other than `json`, `yaml`, `yml`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        }
    }
}

/// Returns the JSON type name of a value, for diagnostics.
#[must_use]
pub const fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Issues
// ============================================================================

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The property is constrained by the matrix but absent from the config
    Missing,
    /// The property's value is not in the allowed list
    Incompatible,
}

impl IssueKind {
    /// Short label used in structured log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Incompatible => "incompatible",
        }
    }
}

/// A single validation failure.
///
/// `Display` yields the human-readable issue text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// Property constrained by the matrix is absent from the configuration.
    MissingProperty {
        /// Property name
        property: String,
    },
    /// Property value is not a member of its allowed list.
    IncompatibleValue {
        /// Property name
        property: String,
        /// Value found in the configuration
        value: Value,
        /// Values the matrix allows
        allowed: Vec<Value>,
    },
}

impl Issue {
    /// The property this issue is about.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::MissingProperty { property } | Self::IncompatibleValue { property, .. } => {
                property.as_str()
            }
        }
    }

    /// The issue category.
    #[must_use]
    pub const fn kind(&self) -> IssueKind {
        match self {
            Self::MissingProperty { .. } => IssueKind::Missing,
            Self::IncompatibleValue { .. } => IssueKind::Incompatible,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProperty { property } => {
                write!(f, "Property '{property}' is missing from the configuration.")
            }
            Self::IncompatibleValue {
                property,
                value,
                allowed,
            } => {
                write!(
                    f,
                    "Property '{property}' has incompatible value '{}'. Allowed values: [",
                    DisplayValue(value)
                )?;
                for (i, item) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Renders a config value for issue text: strings bare, everything else as
/// compact JSON.
struct DisplayValue<'a>(&'a Value);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Serializable form of an issue for the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord {
    /// Property name
    pub property: String,
    /// Issue category
    pub kind: IssueKind,
    /// Human-readable issue text
    pub message: String,
}

impl From<&Issue> for IssueRecord {
    fn from(issue: &Issue) -> Self {
        Self {
            property: issue.property().to_string(),
            kind: issue.kind(),
            message: issue.to_string(),
        }
    }
}
