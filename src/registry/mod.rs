//! Registry generation and loading.
//!
//! ```text
//! content root ──► RegistryBuilder ──► Vec<NoteRecord> ──► artifact (.json / .ts)
//!                   (Extractor per file)                      │
//!                                                Library::load ◄┘
//! ```
//!
//! The builder is an offline step. Consumers only ever see the artifact.

mod artifact;
mod builder;
mod error;


pub use artifact::{ArtifactFormat, parse, read_artifact, render, write_artifact};
pub use builder::{RegistryBuilder, summarize};
pub use error::RegistryError;
