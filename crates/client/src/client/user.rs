//! Identity API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;

impl GrafanaClient {
    /// Get the raw identity document for the configured token.
    pub async fn current_user(&self) -> Result<String> {
        endpoints::get_current_user(&self.http, &self.base_url, self.auth_token()).await
    }
}
