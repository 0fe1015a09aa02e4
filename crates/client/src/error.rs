//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Maximum number of characters of an error body kept in the Display output.
const MAX_DISPLAY_BODY_CHARS: usize = 512;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure reaching the API (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The connection succeeded but the response body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(reqwest::Error),

    /// The API answered with a non-2xx status code.
    #[error("HTTP {status} from {url}: {}", summarize_body(.body))]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// A response body could not be decoded (strict decode mode only).
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A dashboard uid was rejected before any request was built.
    #[error("Invalid dashboard uid '{0}': expected 1-40 characters of [A-Za-z0-9_-]")]
    InvalidUid(String),

    /// No bearer token was supplied to the client builder.
    #[error("Bearer token is required")]
    MissingToken,

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(reqwest::Error),
}

impl ClientError {
    /// HTTP status carried by this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a transport failure (connect refused or timed out).
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Network(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Prefer Grafana's `{"message": "..."}` error envelope over the raw body.
fn summarize_body(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if message.chars().count() > MAX_DISPLAY_BODY_CHARS {
        let truncated: String = message.chars().take(MAX_DISPLAY_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        message
    }
}
