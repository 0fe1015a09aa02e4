//! Authentication types for the dashboard client configuration.
//!
//! Responsibilities:
//! - Hold the static bearer token sent on every request.
//! - Handle serialization of the secret value.
//!
//! Does NOT handle:
//! - Header injection (see the client crate's request builder).
//!
//! Invariants:
//! - The token uses `secrecy::SecretString` so it never appears in Debug output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Service account or API key token, sent as `Authorization: Bearer <token>`.
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

impl AuthConfig {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}
