//! Data models for Grafana API responses.

pub mod dashboards;

pub use dashboards::{DASH_FOLDER_TYPE, DashboardSummary};
