//! Detail view lifecycle for a single displayed note.
//!
//! ```text
//! open(id) ──► NotFound
//!          ├─► Ready (pdf, no fetch)
//!          └─► Loading ── complete(ticket) ──► Ready
//! ```
//!
//! Every `open` issues a new ticket; completing with an older ticket is a
//! no-op, so the last navigation wins.

use super::fetch::ContentFetcher;
use super::resolver::{ContentResolver, NoteBody};
use crate::note::{Library, NoteRecord, NoteType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    /// Body fetch in flight; show a placeholder.
    Loading { note: NoteRecord },
    Ready { note: NoteRecord, body: NoteBody },
    /// No record with this id; offer a way back to the listing.
    NotFound { id: String },
}

#[derive(Debug, Default)]
pub struct NoteView {
    state: ViewState,
    ticket: u64,
}

impl NoteView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Navigate to `id`.
    ///
    /// Returns the ticket and record to resolve when a fetch is needed.
    pub fn open(&mut self, library: &Library, id: &str) -> Option<(Ticket, NoteRecord)> {
        self.ticket += 1;
        let Some(note) = library.get(id) else {
            self.state = ViewState::NotFound { id: id.to_string() };
            return None;
        };

        match note.note_type {
            NoteType::Pdf => {
                self.state = ViewState::Ready {
                    note: note.clone(),
                    body: NoteBody::embed(note),
                };
                None
            }
            NoteType::Markdown => {
                self.state = ViewState::Loading { note: note.clone() };
                Some((Ticket(self.ticket), note.clone()))
            }
        }
    }

    /// Deliver a resolved body. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: Ticket, body: NoteBody) -> bool {
        if ticket.0 != self.ticket {
            return false;
        }
        match std::mem::take(&mut self.state) {
            ViewState::Loading { note } => {
                self.state = ViewState::Ready { note, body };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Leave the detail view, discarding any pending result.
    pub fn close(&mut self) {
        self.ticket += 1;
        self.state = ViewState::Idle;
    }

    /// Open `id` and resolve its body in one step.
    pub async fn show<F: ContentFetcher>(
        &mut self,
        library: &Library,
        resolver: &ContentResolver<F>,
        id: &str,
    ) -> &ViewState {
        if let Some((ticket, note)) = self.open(library, id) {
            let body = resolver.resolve(&note).await;
            self.complete(ticket, body);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryFetcher;
    use crate::utils::date::DateTimeUtc;

    fn record(id: &str, note_type: NoteType) -> NoteRecord {
        let ext = if note_type.is_markdown() { "md" } else { "pdf" };
        NoteRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            date: DateTimeUtc::from_ymd(2026, 1, 20),
            tags: vec!["AI".to_string()],
            description: format!("Technical entry for {id}"),
            note_type,
            path: format!("notes/{id}.{ext}"),
        }
    }

    fn library() -> Library {
        Library::new(vec![
            record("first", NoteType::Markdown),
            record("second", NoteType::Markdown),
            record("paper", NoteType::Pdf),
        ])
    }

    fn text(body: &str) -> NoteBody {
        NoteBody::Markdown {
            text: body.to_string(),
            degraded: false,
        }
    }

    #[test]
    fn test_not_found() {
        let mut view = NoteView::new();
        assert!(view.open(&library(), "nope").is_none());
        assert_eq!(view.state(), &ViewState::NotFound { id: "nope".to_string() });
    }

    #[test]
    fn test_loading_then_ready() {
        let library = library();
        let mut view = NoteView::new();
        let (ticket, note) = view.open(&library, "first").unwrap();
        assert!(matches!(view.state(), ViewState::Loading { .. }));

        assert!(view.complete(ticket, text("body")));
        assert_eq!(view.state(), &ViewState::Ready { note, body: text("body") });
    }

    #[test]
    fn test_pdf_ready_immediately() {
        let mut view = NoteView::new();
        assert!(view.open(&library(), "paper").is_none());
        let ViewState::Ready { body, .. } = view.state() else {
            panic!("expected ready");
        };
        assert_eq!(body, &NoteBody::Embed { src: "notes/paper.pdf".to_string() });
    }

    #[test]
    fn test_stale_result_discarded() {
        let library = library();
        let mut view = NoteView::new();
        let (old, _) = view.open(&library, "first").unwrap();
        let (new, _) = view.open(&library, "second").unwrap();

        assert!(!view.complete(old, text("stale")));
        assert!(matches!(view.state(), ViewState::Loading { note } if note.id == "second"));

        assert!(view.complete(new, text("fresh")));
        assert!(matches!(view.state(), ViewState::Ready { note, .. } if note.id == "second"));
    }

    #[test]
    fn test_close_discards_pending() {
        let library = library();
        let mut view = NoteView::new();
        let (ticket, _) = view.open(&library, "first").unwrap();
        view.close();
        assert!(!view.complete(ticket, text("late")));
        assert_eq!(view.state(), &ViewState::Idle);
    }

    #[tokio::test]
    async fn test_show_resolves() {
        let library = library();
        let resolver = ContentResolver::new(MemoryFetcher::new().with("notes/first.md", "# FIRST\nHello"));
        let mut view = NoteView::new();
        let state = view.show(&library, &resolver, "first").await;
        assert!(matches!(state, ViewState::Ready { body, .. } if body == &text("Hello")));
    }
}
