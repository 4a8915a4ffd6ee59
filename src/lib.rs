//! Folio - content registry and note search for a markdown/pdf blog.
//!
//! ```text
//! content root ──► extract ──► registry artifact ──► Library
//!                                                     ├─► search (QueryEngine, TagIndex)
//!                                                     └─► content (ContentResolver, NoteView)
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod extract;
pub mod logger;
pub mod note;
pub mod registry;
pub mod search;
pub mod utils;
