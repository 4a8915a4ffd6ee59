//! Query Engine: free-text search, tag and year filters, recency order.

use std::sync::Arc;

use super::{Memo, SearchIndex, TagIndex};
use crate::config::SearchConfig;
use crate::note::{Library, NoteRecord};

/// What the reader asked for. All parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub text: String,
    /// Exact, case-sensitive tag.
    pub tag: Option<String>,
    pub year: Option<u16>,
}

impl NoteQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Search text, or `None` when blank.
    pub fn search_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Runs queries against one library.
///
/// The search index and tag index are derived lazily and cached against
/// the library generation.
#[derive(Debug)]
pub struct QueryEngine {
    library: Library,
    config: SearchConfig,
    index: Memo<SearchIndex>,
    tags: Memo<TagIndex>,
}

impl QueryEngine {
    pub fn new(library: Library, config: SearchConfig) -> Self {
        Self {
            library,
            config,
            index: Memo::new(),
            tags: Memo::new(),
        }
    }

    #[inline]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Swap in a rebuilt library. Derived indexes are dropped.
    pub fn replace_library(&mut self, library: Library) {
        self.library = library;
        self.index.clear();
        self.tags.clear();
    }

    pub fn index(&self) -> Arc<SearchIndex> {
        self.index.get_or_build(self.library.generation(), || {
            SearchIndex::new(&self.library, &self.config)
        })
    }

    pub fn tags(&self) -> Arc<TagIndex> {
        self.tags
            .get_or_build(self.library.generation(), || TagIndex::new(&self.library))
    }

    /// Matching records, most recent first.
    ///
    /// Records with the same date keep search relevance order (or library
    /// order for an empty query).
    pub fn run(&self, query: &NoteQuery) -> Vec<&NoteRecord> {
        let notes = self.library.notes();
        let mut results: Vec<&NoteRecord> = match query.search_text() {
            Some(text) => self
                .index()
                .search(text)
                .into_iter()
                .map(|hit| &notes[hit.position])
                .collect(),
            None => notes.iter().collect(),
        };

        if let Some(tag) = &query.tag {
            results.retain(|note| note.has_tag(tag));
        }
        if let Some(year) = query.year {
            results.retain(|note| note.date.year == year);
        }

        results.sort_by(|a, b| b.date.cmp(&a.date));
        results
    }
}
