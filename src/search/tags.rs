//! Tag listing and tag cloud.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::note::Library;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Tag usage across a library, most used first (ties by name).
#[derive(Debug)]
pub struct TagIndex {
    generation: u64,
    counts: Vec<TagCount>,
}

impl TagIndex {
    pub fn new(library: &Library) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for tag in library.notes().iter().flat_map(|note| &note.tags) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }

        let mut counts: Vec<_> = counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

        Self {
            generation: library.generation(),
            counts,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every distinct tag, sorted by name.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.counts.iter().map(|c| c.tag.as_str()).collect();
        tags.sort_unstable();
        tags
    }

    pub fn cloud(&self) -> &[TagCount] {
        &self.counts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
