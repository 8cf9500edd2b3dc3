//! Episode grouping.
//!
//! Collects `(show name, episode label)` pairs into shows, keeping the order
//! in which each show was first seen.

use crate::models::media::MediaEntity;
use std::collections::HashMap;

/// Show name to episode labels, built during a single TV scan.
#[derive(Debug, Default)]
pub struct ShowIndex {
    shows: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl ShowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an episode under its show. Duplicate labels are kept.
    pub fn insert(&mut self, show: String, episode: String) {
        match self.positions.get(&show) {
            Some(&pos) => self.shows[pos].1.push(episode),
            None => {
                self.positions.insert(show.clone(), self.shows.len());
                self.shows.push((show, vec![episode]));
            }
        }
    }

    /// Number of distinct shows recorded so far.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Convert into show entities in first-seen order, dropping shows that
    /// ended up without episodes.
    pub fn into_entities(self) -> Vec<MediaEntity> {
        self.shows
            .into_iter()
            .filter(|(_, episodes)| !episodes.is_empty())
            .map(|(name, episodes)| MediaEntity::show(name, episodes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_episodes(pairs: &[(&str, &str)]) -> Vec<MediaEntity> {
        let mut index = ShowIndex::new();
        for (show, episode) in pairs {
            index.insert(show.to_string(), episode.to_string());
        }
        index.into_entities()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let shows = group_episodes(&[
            ("Alpha", "Alpha E01"),
            ("Beta", "Beta E01"),
            ("Alpha", "Alpha E02"),
        ]);

        assert_eq!(
            shows,
            vec![
                MediaEntity::show("Alpha", vec!["Alpha E01".into(), "Alpha E02".into()]),
                MediaEntity::show("Beta", vec!["Beta E01".into()]),
            ]
        );
    }

    #[test]
    fn test_duplicates_preserved() {
        let shows = group_episodes(&[("Foo", "Foo S01E01"), ("Foo", "Foo S01E01")]);
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].episodes.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_empty_input() {
        let index = ShowIndex::new();
        assert!(index.is_empty());
        assert!(index.into_entities().is_empty());
    }

    #[test]
    fn test_empty_episode_lists_dropped() {
        let mut index = ShowIndex::new();
        index.insert("Kept".into(), "Kept E01".into());
        index.shows.push(("Hollow".into(), Vec::new()));
        assert_eq!(index.len(), 2);

        let shows = index.into_entities();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "Kept");
    }
}
