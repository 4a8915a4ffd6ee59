//! Content kind classification by file extension.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How a note's underlying resource is presented.
///
/// Determined solely by the source file extension; anything other than
/// `.md` or `.pdf` is not a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// Markdown text, fetched and rendered.
    Markdown,
    /// PDF binary, embedded by reference.
    Pdf,
}

impl NoteType {
    /// All note types, in display order.
    pub const ALL: [Self; 2] = [Self::Markdown, Self::Pdf];

    /// Classify a path by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Classify an extension without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("md") {
            Some(Self::Markdown)
        } else if ext.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else {
            None
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
        }
    }

    #[inline]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::Markdown)
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(NoteType::from_path(Path::new("notes/a.md")), Some(NoteType::Markdown));
        assert_eq!(NoteType::from_path(Path::new("b.PDF")), Some(NoteType::Pdf));
        assert_eq!(NoteType::from_path(Path::new("c.Md")), Some(NoteType::Markdown));
    }

    #[test]
    fn test_unrecognized_extensions() {
        assert_eq!(NoteType::from_path(Path::new("notes.txt")), None);
        assert_eq!(NoteType::from_path(Path::new("archive.tar.gz")), None);
        assert_eq!(NoteType::from_path(Path::new("README")), None);
        assert_eq!(NoteType::from_path(Path::new(".md")), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&NoteType::Pdf).unwrap(), r#""pdf""#);
        let parsed: NoteType = serde_json::from_str(r#""markdown""#).unwrap();
        assert_eq!(parsed, NoteType::Markdown);
    }
}
