//! Grotto - a git-native password manager with per-secret history.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use grotto::cli::output;
use grotto::cli::{execute, Cli};
use grotto::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GROTTO_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("grotto=debug")
        } else {
            EnvFilter::new("grotto=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) | Error::Store(StoreError::NotInitialized) => {
                Some("run: grotto init <repository> --key <key-file>")
            }
            Error::Store(StoreError::EmptyStore) => Some("run: grotto insert <path>"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
