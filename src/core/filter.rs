//! Media file filter.
//!
//! Decides which directory entries count as media by extension allow-list.

use crate::models::media::RawFileEntry;
use crate::utils::fs::get_extension;
use std::collections::HashSet;

/// Extension allow-list, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct MediaFilter {
    extensions: HashSet<String>,
}

impl MediaFilter {
    /// Create a filter from extensions such as `.mp4` or `MKV`.
    ///
    /// Entries are lowercased and given a leading dot if they lack one.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref().trim().to_lowercase();
                if e.starts_with('.') {
                    e
                } else {
                    format!(".{}", e)
                }
            })
            .collect();
        Self { extensions }
    }

    /// Check whether a filename carries an allowed extension.
    pub fn accepts(&self, filename: &str) -> bool {
        get_extension(filename)
            .map(|ext| self.extensions.contains(&ext))
            .unwrap_or(false)
    }

    /// Check a walked entry. Directories are never media.
    pub fn accepts_entry(&self, entry: &RawFileEntry) -> bool {
        !entry.is_dir && self.accepts(&entry.file_name())
    }
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self::new(crate::models::config::DEFAULT_EXTENSIONS)
    }
}
