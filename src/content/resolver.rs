//! Content Resolver: one record in, a displayable body out.
//!
//! Markdown bodies are fetched and lose their leading `# Title` line (the
//! caller already shows the title). PDFs are never fetched; the record path
//! is handed back for embedding. A failed fetch yields a fallback body that
//! names the unreachable path instead of an error.

use serde::Serialize;

use super::fetch::{ContentFetcher, FetchError};
use crate::debug;
use crate::extract::markdown::heading_text;
use crate::note::{NoteRecord, NoteType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NoteBody {
    /// Markdown text ready for rendering.
    Markdown {
        text: String,
        /// Set when `text` is the fallback for a failed fetch.
        degraded: bool,
    },
    /// Reference for the view layer to embed.
    Embed { src: String },
}

impl NoteBody {
    pub fn embed(note: &NoteRecord) -> Self {
        Self::Embed {
            src: note.path.clone(),
        }
    }

    pub fn fallback(note: &NoteRecord, err: &FetchError) -> Self {
        Self::Markdown {
            text: format!(
                "**{}** could not be loaded.\n\n> Error: failed to fetch `{}` ({err})\n",
                note.title, note.path
            ),
            degraded: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Markdown { degraded: true, .. })
    }
}

#[derive(Debug, Clone)]
pub struct ContentResolver<F> {
    fetcher: F,
}

impl<F: ContentFetcher> ContentResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn resolve(&self, note: &NoteRecord) -> NoteBody {
        match note.note_type {
            NoteType::Pdf => NoteBody::embed(note),
            NoteType::Markdown => match self.fetcher.fetch(&note.path).await {
                Ok(text) => NoteBody::Markdown {
                    text: strip_title(&text).to_string(),
                    degraded: false,
                },
                Err(err) => {
                    debug!("content"; "{}: {}", note.id, err);
                    NoteBody::fallback(note, &err)
                }
            },
        }
    }
}

/// Drop leading blank lines and a single leading `# Title` line.
pub fn strip_title(text: &str) -> &str {
    let body = skip_blank_lines(text);
    let (first, rest) = body.split_once('\n').unwrap_or((body, ""));
    if heading_text(first.trim_end_matches('\r')).is_some() {
        skip_blank_lines(rest)
    } else {
        body
    }
}

fn skip_blank_lines(mut text: &str) -> &str {
    while let Some((line, rest)) = text.split_once('\n') {
        if !line.trim().is_empty() {
            break;
        }
        text = rest;
    }
    if text.trim().is_empty() { "" } else { text }
}
