//! Show name extraction.
//!
//! Derives a show's name from one of its episode filenames. This is a
//! best-effort heuristic: the name is whatever precedes the first
//! season/episode marker, so titles that happen to contain a marker (for
//! example "The Sopranos" with the ` s` marker) are cut short.

use crate::core::normalizer::tidy_name;
use crate::models::config::DEFAULT_SHOW_MARKERS;

/// Strategy for turning an episode filename into its show name.
pub trait ShowNameStrategy: Send + Sync {
    /// Return the display name of the show `filename` belongs to.
    fn show_name(&self, filename: &str) -> String;
}

/// Cuts the tidied filename at the leftmost marker token.
///
/// Markers are matched case-insensitively. When two markers start at the
/// same position the one listed first wins. A filename without any marker is
/// its own show.
#[derive(Debug, Clone)]
pub struct MarkerTokenExtractor {
    markers: Vec<String>,
}

impl MarkerTokenExtractor {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { markers }
    }

    /// Byte offset in `name` of the leftmost marker, if any.
    fn find_marker(&self, name: &str) -> Option<usize> {
        let (lowered, offsets) = lowercase_with_offsets(name);

        let mut best: Option<usize> = None;
        for marker in &self.markers {
            if let Some(idx) = lowered.find(marker.as_str()) {
                // Strictly less keeps the earlier marker on ties.
                if best.map_or(true, |b| idx < b) {
                    best = Some(idx);
                }
            }
        }

        best.map(|idx| offsets[idx])
    }
}

impl Default for MarkerTokenExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SHOW_MARKERS)
    }
}

impl ShowNameStrategy for MarkerTokenExtractor {
    fn show_name(&self, filename: &str) -> String {
        let name = tidy_name(filename);
        match self.find_marker(&name) {
            Some(idx) => name[..idx].trim().to_string(),
            None => name,
        }
    }
}

/// Lowercase `s`, recording for every byte of the result the byte offset of
/// the source character it came from.
///
/// Lowercasing can change the UTF-8 length of a character, so indices found
/// in the lowered copy cannot be used on the original directly.
fn lowercase_with_offsets(s: &str) -> (String, Vec<usize>) {
    let mut lowered = String::with_capacity(s.len());
    let mut offsets = Vec::with_capacity(s.len() + 1);

    for (idx, c) in s.char_indices() {
        for lc in c.to_lowercase() {
            lowered.push(lc);
            offsets.resize(lowered.len(), idx);
        }
    }
    offsets.push(s.len());

    (lowered, offsets)
}
