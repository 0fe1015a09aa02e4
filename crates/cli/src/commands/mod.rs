//! Verb implementations.
//!
//! Each verb fetches through the shared client, wraps failures with the
//! name of the operation and hands the result to the formatters.

pub mod dashboard;
pub mod search;
pub mod user;
