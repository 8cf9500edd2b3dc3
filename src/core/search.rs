//! Title search.

use crate::models::media::MediaEntity;

/// Keep the entities whose name contains `term`, ignoring case.
///
/// An empty term keeps everything. Relative order is preserved and show
/// episode lists are returned untouched.
pub fn search(entities: Vec<MediaEntity>, term: &str) -> Vec<MediaEntity> {
    if term.is_empty() {
        return entities;
    }

    let term_lower = term.to_lowercase();
    entities
        .into_iter()
        .filter(|entity| entity.name.to_lowercase().contains(&term_lower))
        .collect()
}
