//! Request construction and response classification.
//!
//! Every API call goes through [`authorized_get`] to build the request and
//! [`send_request`] to execute it. There is no retry: a failure is returned
//! to the caller as-is.
//!
//! # Invariants
//! - Every request carries `Authorization: Bearer <token>`.
//! - Only 2xx responses are returned as `Ok`; anything else becomes
//!   `ClientError::HttpStatus` carrying the status code and body.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Build a GET request for `<base_url>/<endpoint>` with the bearer header set.
///
/// `endpoint` is a path relative to the API base (e.g. `user` or
/// `dashboards/uid/abc`). Query parameters must be added by the caller with
/// [`RequestBuilder::query`] so they are URL-encoded.
pub fn authorized_get(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    auth_token: &str,
) -> RequestBuilder {
    let url = format!("{}/{}", base_url, endpoint.trim_start_matches('/'));
    client
        .get(url)
        .header(AUTHORIZATION, format!("Bearer {}", auth_token))
}

/// Send a request and classify the response by status code.
///
/// # Errors
///
/// - `ClientError::InvalidUrl` if the request URL could not be built.
/// - `ClientError::Network` on transport failure.
/// - `ClientError::HttpStatus` for any non-2xx response.
pub async fn send_request(builder: RequestBuilder, endpoint: &str) -> Result<Response> {
    let response = builder.send().await.map_err(|e| {
        if e.is_builder() {
            ClientError::InvalidUrl(e.to_string())
        } else {
            ClientError::Network(e)
        }
    })?;

    let status = response.status();
    debug!(endpoint, method = "GET", status = status.as_u16(), "API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    Err(ClientError::HttpStatus {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Read the full response body as text.
pub async fn read_body(response: Response) -> Result<String> {
    response.text().await.map_err(ClientError::ReadBody)
}
