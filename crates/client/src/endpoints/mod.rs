//! REST API endpoint implementations.
//!
//! Each endpoint is a free function taking the HTTP client, API base URL and
//! bearer token so it can be exercised directly against a mock server.

mod dashboards;
mod request;
mod search;
mod user;

pub use dashboards::{get_dashboard, validate_uid};
pub use request::{authorized_get, read_body, send_request};
pub use search::search_dashboards;
pub use user::get_current_user;
