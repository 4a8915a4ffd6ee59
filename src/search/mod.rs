//! Client-side retrieval over a loaded [`Library`](crate::note::Library).
//!
//! - [`SearchIndex`] - fuzzy index over title, description and tags
//! - [`QueryEngine`] - search, tag/year filters, recency order
//! - [`TagIndex`] - tag list and tag cloud
//!
//! Derived indexes are cached in a [`Memo`] keyed by library generation.

mod fuzzy;
mod index;
mod memo;
mod query;
mod tags;

pub use fuzzy::{FuzzyMatcher, normalize};
pub use index::{SearchHit, SearchIndex};
pub use memo::Memo;
pub use query::{NoteQuery, QueryEngine};
pub use tags::{TagCount, TagIndex};
