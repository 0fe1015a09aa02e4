//! grafana-dash - Command-line client for the Grafana dashboard API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build and validate configuration before any request is issued.
//! - Run the selected verb via the shared client library.
//! - Report failures as one structured log event and a structured exit code.
//!
//! Does NOT handle:
//! - REST API implementation or the filter-and-enrich pipeline (see `crates/client`).
//! - Persistence of results beyond the optional `--output-file`.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs and progress go to stderr; stdout carries only command results.
//! - A missing token fails the process before any HTTP call.
//! - Usage errors exit with the general failure code.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod logging;
mod progress;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_config::{Config, ConfigError, ConfigLoader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; exit code 2 is reserved for HTTP 401.
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::GeneralError
            } else {
                ExitCode::Success
            };
            std::process::exit(code.as_i32());
        }
    };
    logging::init(cli.log_format);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build configuration");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Command failed");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Layer CLI overrides on top of the environment and validate the result.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if !cli.ignore_folders.is_empty() {
        loader = loader.with_ignored_folders(cli.ignore_folders.clone());
    }
    if cli.strict {
        loader = loader.with_strict_decode(true);
    }

    loader.build()
}
