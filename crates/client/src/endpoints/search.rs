//! Dashboard search endpoint.

use grafana_config::DecodeMode;
use reqwest::Client;
use tracing::warn;

use crate::endpoints::{authorized_get, read_body, send_request};
use crate::error::{ClientError, Result};
use crate::models::DashboardSummary;

const SEARCH_ENDPOINT: &str = "search";

/// Search dashboards and folders matching `query`.
///
/// The query is sent as the URL-encoded `query` parameter. In lenient mode a
/// body that does not decode as a list of search hits yields an empty list;
/// in strict mode it fails with `ClientError::InvalidResponse`.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    decode_mode: DecodeMode,
) -> Result<Vec<DashboardSummary>> {
    let builder =
        authorized_get(client, base_url, SEARCH_ENDPOINT, auth_token).query(&[("query", query)]);

    let response = send_request(builder, SEARCH_ENDPOINT).await?;
    let body = read_body(response).await?;

    match serde_json::from_str::<Vec<DashboardSummary>>(&body) {
        Ok(hits) => Ok(hits),
        Err(e) if decode_mode.is_strict() => Err(ClientError::InvalidResponse(format!(
            "search response is not a list of dashboards: {e}"
        ))),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed search response");
            Ok(Vec::new())
        }
    }
}
