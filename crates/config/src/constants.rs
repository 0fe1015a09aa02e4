//! Centralized constants for the grafana-dash workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid magic string duplication.

// =============================================================================
// Environment Variables
// =============================================================================

/// Bearer token used on every API request. Required.
pub const ENV_TOKEN: &str = "GRAFANA_TOKEN";

/// Base URL of the Grafana HTTP API (including the `/api` path).
pub const ENV_BASE_URL: &str = "GRAFANA_URL";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";

/// Request timeout in seconds. Unset means no timeout.
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";

/// Comma-separated folder titles whose dashboards are excluded from search output.
pub const ENV_IGNORE_FOLDERS: &str = "GRAFANA_IGNORE_FOLDERS";

/// Surface JSON decode failures instead of degrading silently (`true`/`false`).
pub const ENV_STRICT_DECODE: &str = "GRAFANA_STRICT_DECODE";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default API base URL (a local Grafana on its default port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search Defaults
// =============================================================================

/// Wildcard search query matching every dashboard.
pub const DEFAULT_SEARCH_QUERY: &str = "%";
