//! Command-line interface
//!
//! Argument parsing and the check command that drives a run.

pub mod args;
pub mod commands;
