//! Shared integration-test harness for running the `compatcheck` binary and
//! locating fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for invoking the built `compatcheck` binary.
pub struct CompatCheckProcess;

impl CompatCheckProcess {
    /// Runs the binary with the given arguments and waits for it to exit.
    ///
    /// Log-level and format overrides from the caller's environment are
    /// cleared so output is predictable.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_compatcheck"))
            .args(args)
            .env_remove("COMPATCHECK_LOG_LEVEL")
            .env_remove("COMPATCHECK_FORMAT")
            .env_remove("COMPATCHECK_LOG_FORMAT")
            .env("COMPATCHECK_COLOR", "never")
            .output()
            .expect("failed to run compatcheck")
    }

    /// Runs the binary on a config and matrix path plus extra flags.
    #[allow(clippy::missing_panics_doc)]
    pub fn check(config: &Path, matrix: &Path, flags: &[&str]) -> Output {
        let mut args: Vec<&str> = flags.to_vec();
        args.push(config.to_str().expect("non-UTF-8 config path"));
        args.push(matrix.to_str().expect("non-UTF-8 matrix path"));
        Self::spawn_command(&args)
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(clippy::missing_panics_doc)]
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}

/// Decodes stdout of a finished process.
#[must_use]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Decodes stderr of a finished process.
#[must_use]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
