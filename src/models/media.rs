//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which half of the library a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movies,
    Shows,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movies => write!(f, "movies"),
            MediaKind::Shows => write!(f, "shows"),
        }
    }
}

/// A movie or a TV show as returned to clients.
///
/// Movies never carry an episode list; `episodes` is then left out of the
/// serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntity {
    /// Tidied display title.
    pub name: String,
    /// Episode display names, only present for shows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<String>>,
}

impl MediaEntity {
    /// Create a movie entity.
    pub fn movie(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            episodes: None,
        }
    }

    /// Create a show entity.
    pub fn show(name: impl Into<String>, episodes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            episodes: Some(episodes),
        }
    }
}

/// One entry produced while walking a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFileEntry {
    /// Full path to the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl RawFileEntry {
    /// Final path component, lossily converted to UTF-8.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
