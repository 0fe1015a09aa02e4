//! `user` verb: print the identity document for the configured token.

use anyhow::{Context, Result};
use grafana_client::GrafanaClient;
use std::path::Path;
use tracing::debug;

use crate::formatters::output_result;

pub async fn run(client: &GrafanaClient, output_file: Option<&Path>) -> Result<()> {
    debug!("Fetching current user");
    let body = client.current_user().await.context("get_user")?;
    output_result(&body, output_file)
}
