//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the API client from the validated configuration.
//! - Route the parsed verb to its handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - A verb takes precedence; otherwise a uid runs the dashboard lookup.
//! - With neither, `user` runs.
//! - Exactly one verb runs per invocation.

use anyhow::{Context, Result};
use grafana_client::GrafanaClient;
use grafana_config::Config;

use crate::args::{Cli, Commands, LogFormat};
use crate::commands;

pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let client = GrafanaClient::builder()
        .from_config(&config)
        .build()
        .context("build_client")?;

    let output_file = cli.output_file.as_deref();
    let show_progress = !cli.quiet && cli.log_format == LogFormat::Text;

    match (cli.command, cli.uid) {
        (Some(Commands::Search { query }), _) => {
            commands::search::run(&client, query.as_deref(), show_progress, output_file).await
        }
        (Some(Commands::User), _) | (None, None) => {
            commands::user::run(&client, output_file).await
        }
        (None, Some(uid)) => commands::dashboard::run(&client, &uid, output_file).await,
    }
}
