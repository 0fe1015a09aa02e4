//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test environment variable handling and precedence.
//! - Test validation of token, base URL and timeout.
//! - Test dotenv loading behavior.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment variable pollution.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// All variables the loader reads, cleared so host settings cannot leak in.
pub const CLEARED_VARS: [(&str, Option<&str>); 6] = [
    ("GRAFANA_TOKEN", None),
    ("GRAFANA_URL", None),
    ("GRAFANA_SKIP_VERIFY", None),
    ("GRAFANA_TIMEOUT", None),
    ("GRAFANA_IGNORE_FOLDERS", None),
    ("GRAFANA_STRICT_DECODE", None),
];

/// Run `f` with every loader variable cleared, then `vars` applied on top.
pub fn with_grafana_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = CLEARED_VARS.to_vec();
    for (key, value) in vars {
        all.retain(|(existing, _)| existing != key);
        all.push((*key, *value));
    }
    temp_env::with_vars(all, f)
}
