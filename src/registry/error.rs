//! Registry build and load errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while building, writing or loading the registry.
///
/// Build-time I/O errors abort the whole build; there is no partial registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to create content directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("failed to read content directory `{0}`")]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("failed to read content file `{0}`")]
    ReadFile(PathBuf, #[source] io::Error),

    #[error("failed to write registry `{0}`")]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to read registry `{0}`")]
    ReadArtifact(PathBuf, #[source] io::Error),

    #[error("invalid registry `{path}`: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize registry")]
    Serialize(#[from] serde_json::Error),
}
