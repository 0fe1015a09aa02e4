//! Output formatting and delivery for CLI commands.
//!
//! Responsibilities:
//! - Render search results as indented JSON.
//! - Deliver a rendered result to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Raw response bodies, which are delivered unchanged.
//!
//! Invariants:
//! - Every delivered result ends with exactly one trailing newline.
//! - An empty result set renders as `[]`.

mod common;
mod json;

pub use common::{output_result, write_to_file};
pub use json::format_json;
