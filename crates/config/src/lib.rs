//! Configuration management for the Grafana dashboard client.
//!
//! This crate provides types and loaders for building the dashboard client
//! configuration from environment variables, `.env` files and explicit
//! overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, DecodeMode, SearchConfig};
