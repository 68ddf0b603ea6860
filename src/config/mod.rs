//! Input documents and their validation
//!
//! Loads the configuration and the compatibility matrix, and checks the
//! former against the latter.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_matrix, parse_config, parse_matrix};
pub use schema::*;
pub use validation::validate;
