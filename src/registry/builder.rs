//! Registry Builder: content root in, ordered `NoteRecord`s out.

use std::fs;
use std::path::{Path, PathBuf};

use super::RegistryError;
use crate::config::SiteConfig;
use crate::extract::Extractor;
use crate::logger::ProgressLine;
use crate::note::{NoteRecord, NoteType};
use crate::utils::plural_count;
use crate::{debug, log};

/// Scans one content directory (non-recursive) and extracts every note.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    content_dir: PathBuf,
    extractor: Extractor,
}

/// A content file recognised as a note, waiting to be extracted.
struct Candidate {
    path: PathBuf,
    note_type: NoteType,
}

impl RegistryBuilder {
    pub fn new(content_dir: impl Into<PathBuf>, extractor: Extractor) -> Self {
        Self {
            content_dir: content_dir.into(),
            extractor,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.build.content.clone(), Extractor::from_config(config))
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Build the registry.
    ///
    /// A missing content root is created and yields an empty registry.
    /// Any I/O failure on an existing root aborts the whole build.
    pub fn build(&self) -> Result<Vec<NoteRecord>, RegistryError> {
        if !self.content_dir.exists() {
            fs::create_dir_all(&self.content_dir)
                .map_err(|e| RegistryError::CreateDir(self.content_dir.clone(), e))?;
            log!("build"; "created empty content directory {}", self.content_dir.display());
            return Ok(Vec::new());
        }

        let candidates = self.scan()?;
        let progress = ProgressLine::new(&NoteType::ALL.map(|kind| {
            let total = candidates.iter().filter(|c| c.note_type == kind).count();
            (kind.as_str(), total)
        }));

        let mut notes = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            if let Some(note) = self.extract(candidate)? {
                notes.push(note);
            }
            progress.inc(candidate.note_type.as_str());
        }
        progress.finish();

        Ok(notes)
    }

    /// List note files in the content root, sorted by file name.
    fn scan(&self) -> Result<Vec<Candidate>, RegistryError> {
        let read_dir_err = |e| RegistryError::ReadDir(self.content_dir.clone(), e);

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.content_dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            let Some(note_type) = NoteType::from_path(&path) else {
                debug!("build"; "skip {}", path.display());
                continue;
            };

            // Follows symlinks; a dangling note link fails the build
            let meta = fs::metadata(&path).map_err(|e| RegistryError::ReadFile(path.clone(), e))?;
            if !meta.is_file() {
                debug!("build"; "skip {} (not a file)", path.display());
                continue;
            }
            candidates.push(Candidate { path, note_type });
        }

        // read_dir order is platform dependent
        candidates.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(candidates)
    }

    fn extract(&self, candidate: &Candidate) -> Result<Option<NoteRecord>, RegistryError> {
        let read_err = |e| RegistryError::ReadFile(candidate.path.clone(), e);

        let modified = fs::metadata(&candidate.path)
            .and_then(|meta| meta.modified())
            .map_err(read_err)?;
        let content = if candidate.note_type.is_markdown() {
            fs::read(&candidate.path).map_err(read_err)?
        } else {
            Vec::new()
        };

        Ok(self.extractor.extract(&candidate.path, &content, modified))
    }
}

/// One-line summary such as `3 markdown notes, 1 pdf note`.
pub fn summarize(notes: &[NoteRecord]) -> String {
    NoteType::ALL
        .iter()
        .map(|&kind| {
            let count = notes.iter().filter(|n| n.note_type == kind).count();
            plural_count(count, &format!("{kind} note"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
