//! Dashboard models for the Grafana search API.
//!
//! Search hits use Grafana's camelCase field names on the wire and are
//! serialized back out with the same names.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Search hit `type` marking a folder rather than a dashboard.
pub const DASH_FOLDER_TYPE: &str = "dash-folder";

/// One entry from a dashboard search response.
///
/// `description` is not part of the search payload; it stays empty until
/// the dashboard document is fetched and attached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// `dash-db` for dashboards, `dash-folder` for folders.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_uid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl DashboardSummary {
    /// True when this hit is a folder, not a dashboard.
    pub fn is_folder(&self) -> bool {
        self.kind == DASH_FOLDER_TYPE
    }
}
