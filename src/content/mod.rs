//! Note body resolution for the detail view.

mod fetch;
mod resolver;
mod view;

pub use fetch::{ContentFetcher, FetchError, FsFetcher, MemoryFetcher, is_remote};
pub use resolver::{ContentResolver, NoteBody, strip_title};
pub use view::{NoteView, Ticket, ViewState};
