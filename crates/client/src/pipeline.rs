//! Filtering half of the filter-and-enrich pipeline.
//!
//! The enrichment half needs the network and lives on
//! [`GrafanaClient::enrich_dashboards`](crate::GrafanaClient::enrich_dashboards).

use grafana_config::SearchConfig;
use tracing::debug;

use crate::models::DashboardSummary;

/// Drop folders and dashboards in ignored folders, keeping relative order.
pub fn retain_dashboards(
    hits: Vec<DashboardSummary>,
    search: &SearchConfig,
) -> Vec<DashboardSummary> {
    hits.into_iter()
        .filter(|hit| {
            if hit.is_folder() {
                return false;
            }
            if search.is_ignored_folder(&hit.folder_title) {
                debug!(uid = %hit.uid, folder = %hit.folder_title, "Skipping dashboard in ignored folder");
                return false;
            }
            true
        })
        .collect()
}
