//! Identity endpoint.

use reqwest::Client;

use crate::endpoints::{authorized_get, read_body, send_request};
use crate::error::Result;

const USER_ENDPOINT: &str = "user";

/// Get the identity behind the bearer token.
///
/// The body is returned verbatim; it is never parsed.
pub async fn get_current_user(client: &Client, base_url: &str, auth_token: &str) -> Result<String> {
    let builder = authorized_get(client, base_url, USER_ENDPOINT, auth_token);
    let response = send_request(builder, USER_ENDPOINT).await?;
    read_body(response).await
}
