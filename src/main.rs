//! gbe-build - build driver for the gbe emulator
//!
//! Entry point for the gbe-build command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gbe_build::cli::output::display_error;
use gbe_build::cli::Cli;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "GBE_LOG";

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into())),
        )
        .init();

    // Exit with the failed step's status, or the run's own exit code
    match cli.run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
