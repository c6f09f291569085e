//! hyperion-lint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use hyperion_lint::cli::{Cli, Command, LintCommand, LintSettings};
use hyperion_lint::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status for faults: unreadable input, bad arguments, internal errors.
const FAULT_EXIT_CODE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--verbose` flag sets level to INFO
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN
///
/// Logs go to stderr so they never mix with the report on stdout.
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("hyperion_lint=debug")
    } else if verbose {
        EnvFilter::new("hyperion_lint=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hyperion_lint=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<u8> {
    let settings = LintSettings::from_cli(cli)?;
    let command = LintCommand::new(settings);
    let stdout = std::io::stdout();
    let result = command.execute(&mut stdout.lock())?;
    Ok(result.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    tracing::debug!("hyperion-lint starting with args: {:?}", cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(FAULT_EXIT_CODE)
        }
    }
}
