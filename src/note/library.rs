//! Shared, immutable record collection with a stable identity.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::NoteRecord;
use crate::registry::{RegistryError, read_artifact};

/// Source of process-unique library generations.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// The loaded registry: read-only records shared by every consumer.
///
/// Each `Library` created via [`Library::new`] gets a fresh generation;
/// clones share records and generation. Derived views (search index,
/// tag index) are cached against the generation, so swapping in a new
/// library invalidates them without any mutable global state.
#[derive(Debug, Clone)]
pub struct Library {
    generation: u64,
    notes: Arc<[NoteRecord]>,
}

impl Library {
    pub fn new(notes: Vec<NoteRecord>) -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            notes: notes.into(),
        }
    }

    /// Load a registry artifact (`.json` or `.ts`) written by `folio build`.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        read_artifact(path).map(Self::new)
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    /// Find a record by id. `None` is the "not found" state shown to readers.
    pub fn get(&self, id: &str) -> Option<&NoteRecord> {
        self.notes.iter().find(|note| note.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteType;
    use crate::utils::date::DateTimeUtc;

    fn note(id: &str) -> NoteRecord {
        NoteRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            date: DateTimeUtc::from_ymd(2025, 1, 1),
            tags: vec!["Archive".to_string()],
            description: format!("Technical entry for {id}"),
            note_type: NoteType::Markdown,
            path: format!("notes/{id}.md"),
        }
    }

    #[test]
    fn test_get_by_id() {
        let library = Library::new(vec![note("a"), note("b")]);
        assert_eq!(library.get("b").map(|n| n.title.as_str()), Some("B"));
        assert!(library.get("missing").is_none());
    }

    #[test]
    fn test_clone_shares_generation() {
        let library = Library::new(vec![note("a")]);
        let clone = library.clone();
        assert_eq!(library.generation(), clone.generation());
    }

    #[test]
    fn test_new_library_gets_new_generation() {
        let first = Library::new(vec![note("a")]);
        let second = Library::new(vec![note("a")]);
        assert_ne!(first.generation(), second.generation());
    }

    #[test]
    fn test_empty_library() {
        let library = Library::default();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert!(library.get("anything").is_none());
    }
}
