//! The note record stored in the registry.

use serde::{Deserialize, Serialize};

use super::NoteType;
use crate::utils::date::{DateTimeUtc, ymd};

/// One registry entry: metadata for a single content file.
///
/// # Fields
///
/// | Field         | JSON key      | Description                                  |
/// |---------------|---------------|----------------------------------------------|
/// | `id`          | `id`          | File base name without extension             |
/// | `title`       | `title`       | First `# ` heading, or derived from `id`     |
/// | `date`        | `date`        | Source mtime as `YYYY-MM-DD` (UTC)           |
/// | `tags`        | `tags`        | Never empty (sentinel tag by default)        |
/// | `description` | `description` | Directive, first paragraph line, or fallback |
/// | `note_type`   | `type`        | `markdown` or `pdf`                          |
/// | `path`        | `path`        | Site-relative path or absolute URL           |
///
/// Records are immutable once built; a rebuild replaces the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    #[serde(with = "ymd")]
    pub date: DateTimeUtc,
    pub tags: Vec<String>,
    /// Optional in hand-written registries; always set by the extractor.
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub path: String,
}

impl NoteRecord {
    /// Exact, case-sensitive tag membership.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[inline]
    pub fn is_markdown(&self) -> bool {
        self.note_type.is_markdown()
    }
}
