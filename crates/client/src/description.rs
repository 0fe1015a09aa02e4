//! Description extraction from single-dashboard documents.
//!
//! The dashboard document is treated as opaque JSON; only
//! `dashboard.description` is read.

use grafana_config::DecodeMode;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Extract `dashboard.description` from a raw dashboard document.
///
/// A missing `dashboard` or `description` key, or a non-string value,
/// yields an empty string in both modes. Input that is not JSON at all
/// yields an empty string in lenient mode and `InvalidResponse` in strict
/// mode.
pub fn extract_description(raw: &str, mode: DecodeMode) -> Result<String> {
    let document: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) if mode.is_strict() => {
            return Err(ClientError::InvalidResponse(format!(
                "dashboard document is not valid JSON: {e}"
            )));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed dashboard document");
            return Ok(String::new());
        }
    };

    Ok(document
        .pointer("/dashboard/description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}
