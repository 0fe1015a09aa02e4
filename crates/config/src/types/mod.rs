//! Configuration type definitions for the dashboard client.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connection and search behavior.
//! - Provide serialization helpers for sensitive and duration-valued fields.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;
mod search;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
pub use search::{DecodeMode, SearchConfig};
