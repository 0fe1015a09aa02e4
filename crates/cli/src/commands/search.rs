//! `search` verb: search dashboards and print them with their descriptions.
//!
//! Responsibilities:
//! - Resolve the effective query (blank or missing means `%`).
//! - Run the filter-and-enrich pipeline with a progress indicator.
//! - Print the enriched dashboards as indented JSON.
//!
//! Does NOT handle:
//! - Filtering or description extraction (see `grafana_client`).

use anyhow::{Context, Result};
use grafana_client::{DashboardSummary, GrafanaClient};
use grafana_config::constants::DEFAULT_SEARCH_QUERY;
use std::path::Path;
use tracing::info;

use crate::formatters::{format_json, output_result};
use crate::progress::DescriptionProgress;

pub async fn run(
    client: &GrafanaClient,
    query: Option<&str>,
    show_progress: bool,
    output_file: Option<&Path>,
) -> Result<()> {
    let query = effective_query(query);
    info!(query, "Searching dashboards");

    let progress = DescriptionProgress::new(show_progress);
    let mut on_progress = |position: usize, total: usize, dashboard: &DashboardSummary| {
        progress.update(position, total, &dashboard.title);
    };

    let dashboards = client
        .search_and_enrich(query, Some(&mut on_progress))
        .await
        .context("search_dashboards")?;
    progress.finish();

    info!(count = dashboards.len(), "Search complete");
    let output = format_json(&dashboards)?;
    output_result(&output, output_file)
}

fn effective_query(query: Option<&str>) -> &str {
    match query.map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => DEFAULT_SEARCH_QUERY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_matches_everything() {
        assert_eq!(effective_query(None), "%");
    }

    #[test]
    fn test_blank_query_matches_everything() {
        assert_eq!(effective_query(Some("   ")), "%");
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(effective_query(Some("  cpu ")), "cpu");
    }
}
