//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for reading dashboard
//! metadata from the Grafana HTTP API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `user`: Identity lookup
//! - `search`: Dashboard search and the filter-and-enrich pipeline
//! - `dashboards`: Single-dashboard lookup and description extraction
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//!
//! # Invariants
//! - Calls are made one at a time; no method issues concurrent requests.
//! - No method retries: every failure is returned to the caller.

pub mod builder;

mod dashboards;
mod search;
mod user;

pub use search::EnrichProgress;

use grafana_config::SearchConfig;
use secrecy::{ExposeSecret, SecretString};

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com/api".to_string())
///     .token(SecretString::new("glsa_...".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
    pub(crate) search: SearchConfig,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the search filtering and decoding settings.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub(crate) fn auth_token(&self) -> &str {
        self.token.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn token() -> SecretString {
        SecretString::new("test-token".to_string().into())
    }

    #[test]
    fn test_client_builder_with_token() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/api".to_string())
            .token(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://grafana.example.com/api");
        assert_eq!(client.auth_token(), "test-token");
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = GrafanaClient::builder().token(token()).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_token() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/api".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::MissingToken));
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/api/".to_string())
            .token(token())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://grafana.example.com/api");
    }

    #[test]
    fn test_debug_does_not_expose_token() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/api".to_string())
            .token(SecretString::new("glsa_do_not_print".to_string().into()))
            .build()
            .unwrap();

        assert!(!format!("{:?}", client).contains("glsa_do_not_print"));
    }
}
