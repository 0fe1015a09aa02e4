//! Search filtering and response decoding settings.

use serde::{Deserialize, Serialize};

/// How the client treats response bodies that fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Malformed bodies degrade to empty results and a logged warning.
    #[default]
    Lenient,
    /// Malformed bodies surface as typed errors.
    Strict,
}

impl DecodeMode {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }

    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Folder titles whose dashboards are dropped from search output.
    /// Matching is case-insensitive on the trimmed title.
    #[serde(default)]
    pub ignored_folders: Vec<String>,
    #[serde(default)]
    pub decode_mode: DecodeMode,
}

impl SearchConfig {
    /// Returns true if dashboards in the folder titled `folder_title` are excluded.
    pub fn is_ignored_folder(&self, folder_title: &str) -> bool {
        let title = folder_title.trim();
        !title.is_empty()
            && self
                .ignored_folders
                .iter()
                .any(|ignored| ignored.trim().eq_ignore_ascii_case(title))
    }
}
