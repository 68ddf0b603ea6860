//! `compatcheck` - configuration compatibility checker

use std::any::Any;

use clap::Parser;

use compatcheck::cli::args::Cli;
use compatcheck::cli::commands;
use compatcheck::error::ExitCode;
use compatcheck::observability::{LogLevel, LogSettings, init_logging};

fn main() {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.verbose, cli.quiet);
    init_logging(LogSettings {
        level,
        format: cli.log_format,
        color: cli.color,
    });
    match level {
        LogLevel::Debug | LogLevel::Trace => tracing::debug!("verbose logging enabled"),
        LogLevel::Error => tracing::debug!("suppressing output except for errors"),
        LogLevel::Info => {}
    }

    // Panics are logged through tracing and reported like any other
    // unexpected failure.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "panic during run");
    }));

    let code = match std::panic::catch_unwind(|| commands::check::run(&cli)) {
        Ok(Ok(outcome)) => outcome.exit_code(),
        Ok(Err(e)) => {
            commands::report_failure(&e);
            e.exit_code()
        }
        Err(payload) => {
            eprintln!(
                "An unexpected error occurred: {}",
                panic_message(payload.as_ref())
            );
            ExitCode::FAILURE
        }
    };

    std::process::exit(code);
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("panic with non-string payload")
}
