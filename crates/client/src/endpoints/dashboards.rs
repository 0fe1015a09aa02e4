//! Single-dashboard endpoint.

use reqwest::Client;

use crate::endpoints::{authorized_get, read_body, send_request};
use crate::error::{ClientError, Result};

/// Longest uid Grafana will assign or accept.
const MAX_UID_LEN: usize = 40;

/// Check that `uid` is a well-formed Grafana dashboard uid.
///
/// Accepted uids are 1-40 characters of ASCII letters, digits, `-` and `_`.
/// Anything else (slashes, dots, `?`, `%`, whitespace) is rejected so the uid
/// can never alter the request path.
pub fn validate_uid(uid: &str) -> Result<&str> {
    let well_formed = !uid.is_empty()
        && uid.len() <= MAX_UID_LEN
        && uid
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if well_formed {
        Ok(uid)
    } else {
        Err(ClientError::InvalidUid(uid.to_string()))
    }
}

/// Get a single dashboard document by uid.
///
/// The body is returned verbatim. The uid is validated before any request
/// is built.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    uid: &str,
) -> Result<String> {
    let endpoint = format!("dashboards/uid/{}", validate_uid(uid)?);
    let builder = authorized_get(client, base_url, &endpoint, auth_token);
    let response = send_request(builder, &endpoint).await?;
    read_body(response).await
}
