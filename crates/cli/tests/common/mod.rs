//! Shared test utilities for grafana-dash integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (token, base URL).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GRAFANA_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;
use wiremock::MockServer;

/// Returns a hermetic `grafana-dash` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other configuration env vars are cleared so the host cannot leak in.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-dash");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GRAFANA_TOKEN", "test-token");

    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("GRAFANA_IGNORE_FOLDERS")
        .env_remove("GRAFANA_STRICT_DECODE")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `grafana-dash` command pointed at a mock server's `/api`.
#[allow(dead_code)]
pub fn grafana_cmd_for(server: &MockServer) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", format!("{}/api", server.uri()));
    cmd
}
