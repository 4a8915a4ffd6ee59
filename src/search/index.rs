//! Fuzzy text index over `title`, `description` and `tags`.

use std::cmp::Ordering;

use super::fuzzy::{FuzzyMatcher, normalize};
use crate::config::SearchConfig;
use crate::note::Library;

/// A record matched by a search, by position in the library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub position: usize,
    /// `0.0` is a perfect match.
    pub score: f64,
}

/// Normalized search keys of one record.
#[derive(Debug)]
struct IndexEntry {
    title: Vec<char>,
    description: Vec<char>,
    tags: Vec<Vec<char>>,
}

impl IndexEntry {
    fn keys(&self) -> impl Iterator<Item = &[char]> {
        [self.title.as_slice(), self.description.as_slice()]
            .into_iter()
            .chain(self.tags.iter().map(Vec::as_slice))
    }
}

/// Search index built for one library generation.
#[derive(Debug)]
pub struct SearchIndex {
    generation: u64,
    matcher: FuzzyMatcher,
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new(library: &Library, config: &SearchConfig) -> Self {
        let entries = library
            .notes()
            .iter()
            .map(|note| IndexEntry {
                title: normalize(&note.title),
                description: normalize(&note.description),
                tags: note.tags.iter().map(|tag| normalize(tag)).collect(),
            })
            .collect();

        Self {
            generation: library.generation(),
            matcher: FuzzyMatcher::new(config),
            entries,
        }
    }

    /// Generation of the library this index was built from.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records matching `query`, best first.
    ///
    /// A record scores as its best-matching key. Equal scores keep library
    /// order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let pattern = normalize(query.trim());
        let mut hits: Vec<_> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                entry
                    .keys()
                    .filter_map(|key| self.matcher.score(&pattern, key))
                    .min_by(f64::total_cmp)
                    .map(|score| SearchHit { position, score })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });
        hits
    }
}
