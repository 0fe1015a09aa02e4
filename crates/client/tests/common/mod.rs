//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers expose the API under `/api`, matching a real Grafana base URL
//!
//! # What this does NOT handle
//! - Mock expectations (use wiremock directly in tests)

#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

#[allow(unused_imports)]
pub use grafana_client::{ClientError, DashboardSummary, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use grafana_config::SearchConfig;
use secrecy::SecretString;

pub const TEST_TOKEN: &str = "test-token";

/// API base URL for a mock server.
#[allow(dead_code)]
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

/// Build a client against a mock server with the given search settings.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, search: SearchConfig) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(api_base(server))
        .token(SecretString::new(TEST_TOKEN.to_string().into()))
        .search_config(search)
        .build()
        .expect("client should build")
}

/// Build a client with default (lenient, nothing ignored) search settings.
#[allow(dead_code)]
pub fn default_client(server: &MockServer) -> GrafanaClient {
    client_for(server, SearchConfig::default())
}
