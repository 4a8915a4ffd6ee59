//! Note types: records, content kinds, and the shared record collection.

mod kind;
mod library;
mod record;

pub use kind::NoteType;
pub use library::Library;
pub use record::NoteRecord;
