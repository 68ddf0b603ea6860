//! Compatibility validation
//!
//! Checks every property the matrix constrains against the configuration.
//! Properties the matrix does not mention are never reported. Each issue is
//! logged at `WARN` as it is found, so the log stream and the returned list
//! carry the same issues in the same order.

use serde_json::{Number, Value};

use crate::config::schema::{CompatibilityMatrix, ConfigDocument, Issue};

/// Validates `config` against `matrix`.
///
/// Walks the matrix in its own order and emits at most one issue per matrix
/// property: missing from the config, or present with a value that matches
/// none of the allowed values. `8` and `"8"` are different values; `8` and
/// `8.0` are the same value.
///
/// An empty result means the configuration is compatible.
#[must_use]
pub fn validate(config: &ConfigDocument, matrix: &CompatibilityMatrix) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (property, allowed) in matrix {
        let issue = match config.get(property) {
            None => Issue::MissingProperty {
                property: property.clone(),
            },
            Some(value) if allowed.iter().any(|a| values_match(value, a)) => {
                tracing::trace!(%property, "property compatible");
                continue;
            }
            Some(value) => Issue::IncompatibleValue {
                property: property.clone(),
                value: value.clone(),
                allowed: allowed.clone(),
            },
        };

        tracing::warn!(property = %property, kind = issue.kind().as_str(), "{issue}");
        issues.push(issue);
    }

    tracing::debug!(
        checked = matrix.len(),
        issues = issues.len(),
        "validation complete"
    );
    issues
}

/// Membership test for a single allowed value.
///
/// Numbers compare by numeric value, so `8.0` matches `8`. Every other pair
/// must have the same JSON type; arrays and objects compare element-wise.
fn values_match(actual: &Value, allowed: &Value) -> bool {
    match (actual, allowed) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_match(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(k, v)| b.get(k).is_some_and(|w| values_match(v, w)))
        }
        _ => actual == allowed,
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}
