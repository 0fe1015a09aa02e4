//! Serde helpers for Grafana's loosely typed JSON.
//!
//! Invariants / assumptions:
//! - Grafana may send `null` where a list or string is expected depending on
//!   version and folder placement; those decode to the type's default.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
