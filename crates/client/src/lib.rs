//! Grafana HTTP API client.
//!
//! This crate provides a type-safe client for reading dashboard metadata
//! from the Grafana HTTP API with static bearer-token authentication. It
//! covers the identity endpoint, dashboard search, single-dashboard lookup
//! and the description enrichment that ties search and lookup together.

pub mod client;
pub mod description;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pipeline;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use description::extract_description;
pub use error::{ClientError, Result};
pub use models::{DASH_FOLDER_TYPE, DashboardSummary};
pub use pipeline::retain_dashboards;
