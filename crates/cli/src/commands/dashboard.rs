//! Fallback verb: print a single dashboard document looked up by uid.
//!
//! Invariants:
//! - The body is printed exactly as the API returned it.
//! - The uid is validated by the client before any request is sent.

use anyhow::{Context, Result};
use grafana_client::GrafanaClient;
use std::path::Path;
use tracing::debug;

use crate::formatters::output_result;

pub async fn run(client: &GrafanaClient, uid: &str, output_file: Option<&Path>) -> Result<()> {
    debug!(uid, "Fetching dashboard");
    let body = client
        .get_dashboard(uid)
        .await
        .with_context(|| format!("get_dashboard [{uid}]"))?;
    output_result(&body, output_file)
}
