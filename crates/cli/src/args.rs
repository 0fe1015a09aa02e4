//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map global flags onto the configuration environment variables.
//! - Accept a bare dashboard uid in place of a verb.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `grafana_config::ConfigLoader`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grafana-dash")]
#[command(about = "Query Grafana dashboards from the command line", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(
    after_help = "Examples:\n  grafana-dash\n  grafana-dash search\n  grafana-dash search cpu\n  grafana-dash --ignore-folder Scratch search\n  grafana-dash abc123XYZ\n  grafana-dash abc123XYZ --output-file dash.json\n\nSearch output keeps Grafana's camelCase field names (folderId, folderTitle, folderUid, ...)\nand adds a `description` taken from each dashboard's JSON model.\n"
)]
pub struct Cli {
    /// Grafana API base URL, including the /api path (e.g., https://grafana.example.com/api)
    #[arg(short, long, global = true, env = "GRAFANA_URL")]
    pub base_url: Option<String>,

    /// Bearer token (service account or API key)
    #[arg(short, long, global = true, env = "GRAFANA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds; falls back to GRAFANA_TIMEOUT, no timeout when both are unset
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Drop dashboards in the folder with this title from search output (repeatable)
    #[arg(long = "ignore-folder", global = true, value_name = "TITLE")]
    pub ignore_folders: Vec<String>,

    /// Fail on malformed response bodies and failed description lookups
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Suppress progress output.
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Dashboard uid to look up when no verb is given
    #[arg(value_name = "UID")]
    pub uid: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the identity behind the configured token (default)
    User,

    /// Search dashboards and print them with their descriptions
    Search {
        /// Search query; `%` matches every dashboard
        query: Option<String>,
    },
}
