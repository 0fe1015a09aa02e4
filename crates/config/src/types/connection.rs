//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection, auth and search settings.
//!
//! Does NOT handle:
//! - Configuration loading (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `timeout` is serialized as whole seconds; `None` means no timeout.
//! - `base_url` never carries a trailing slash once built by the loader.

use crate::constants::DEFAULT_BASE_URL;
use crate::types::auth::AuthConfig;
use crate::types::search::SearchConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing an optional Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Connection configuration for the Grafana HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the API, including the `/api` path (e.g. https://grafana.example.com/api)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds). `None` blocks until the server answers.
    #[serde(default, with = "duration_seconds")]
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Search filtering and decoding settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Create a config with the given base URL and token, defaults elsewhere.
    pub fn with_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::new(token),
            search: SearchConfig::default(),
        }
    }
}
