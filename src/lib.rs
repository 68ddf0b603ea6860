//! `compatcheck` - configuration compatibility checker
//!
//! This library loads a configuration document (JSON or YAML) and a JSON
//! compatibility matrix, and reports every matrix property the configuration
//! is missing or sets to a value outside its allowed list.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
