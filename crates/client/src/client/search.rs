//! Search API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Dashboard search
//! - The filter-and-enrich pipeline that attaches descriptions to search hits
//!
//! # Invariants
//! - Enrichment fetches one dashboard at a time, in search order.
//! - Transport and read failures always abort enrichment.
//! - In lenient mode an HTTP status failure or an unusable uid on a single
//!   dashboard leaves that dashboard's description empty.

use tracing::{info, warn};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::DashboardSummary;
use crate::pipeline::retain_dashboards;

/// Callback invoked before each dashboard is enriched with
/// `(position, total, dashboard)`; `position` starts at 1.
pub type EnrichProgress<'a> = &'a mut (dyn FnMut(usize, usize, &DashboardSummary) + Send);

impl GrafanaClient {
    /// Search dashboards and folders matching `query` (`%` matches everything).
    pub async fn search_dashboards(&self, query: &str) -> Result<Vec<DashboardSummary>> {
        endpoints::search_dashboards(
            &self.http,
            &self.base_url,
            self.auth_token(),
            query,
            self.search.decode_mode,
        )
        .await
    }

    /// Filter search hits and attach each surviving dashboard's description.
    ///
    /// Folders and dashboards in ignored folders are dropped; the rest keep
    /// their relative order.
    pub async fn enrich_dashboards(
        &self,
        hits: Vec<DashboardSummary>,
        mut progress_cb: Option<EnrichProgress<'_>>,
    ) -> Result<Vec<DashboardSummary>> {
        let mut dashboards = retain_dashboards(hits, &self.search);
        let total = dashboards.len();

        for (index, dashboard) in dashboards.iter_mut().enumerate() {
            info!(title = %dashboard.title, uid = %dashboard.uid, "Fetching dashboard description");
            if let Some(cb) = progress_cb.as_deref_mut() {
                cb(index + 1, total, dashboard);
            }

            dashboard.description = match self.dashboard_description(&dashboard.uid).await {
                Ok(description) => description,
                Err(e @ (ClientError::HttpStatus { .. } | ClientError::InvalidUid(_)))
                    if !self.search.decode_mode.is_strict() =>
                {
                    warn!(uid = %dashboard.uid, error = %e, "Leaving description empty");
                    String::new()
                }
                Err(e) => return Err(e),
            };
        }

        Ok(dashboards)
    }

    /// Search, then filter and enrich the hits.
    pub async fn search_and_enrich(
        &self,
        query: &str,
        progress_cb: Option<EnrichProgress<'_>>,
    ) -> Result<Vec<DashboardSummary>> {
        let hits = self.search_dashboards(query).await?;
        self.enrich_dashboards(hits, progress_cb).await
    }
}
