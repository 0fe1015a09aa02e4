//! Single-dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Fetching a raw dashboard document by uid
//! - Fetching just the dashboard's description
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])
//! - JSON traversal of the document (in [`crate::description`])

use crate::client::GrafanaClient;
use crate::description::extract_description;
use crate::endpoints;
use crate::error::Result;

impl GrafanaClient {
    /// Get a dashboard document by uid, returned verbatim.
    pub async fn get_dashboard(&self, uid: &str) -> Result<String> {
        endpoints::get_dashboard(&self.http, &self.base_url, self.auth_token(), uid).await
    }

    /// Get the `dashboard.description` of a dashboard, or an empty string.
    pub async fn dashboard_description(&self, uid: &str) -> Result<String> {
        let document = self.get_dashboard(uid).await?;
        extract_description(&document, self.search.decode_mode)
    }
}
