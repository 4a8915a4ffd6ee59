//! Read-only fetch-by-path for note bodies.

use std::future::Future;
use std::io;
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("remote content `{0}` is not fetched")]
    Remote(String),

    #[error("`{0}` points outside the site root")]
    OutsideRoot(String),
}

/// Source of raw note text, addressed by `NoteRecord.path`.
pub trait ContentFetcher {
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Whether `path` is an absolute URL rather than a site path.
pub fn is_remote(path: &str) -> bool {
    Url::parse(path).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Reads note bodies from the site root on disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a site path (`notes/a.md` or `/notes/a.md`) to a file under the root.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        if is_remote(path) {
            return Err(FetchError::Remote(path.to_string()));
        }

        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FetchError::OutsideRoot(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl ContentFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.resolve(path)?;
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|source| FetchError::Io { path: full, source })
    }
}

/// Bodies held in memory, keyed by site path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    bodies: FxHashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.bodies.insert(path.into(), body.into());
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }
}

impl ContentFetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.bodies.get(path).cloned().ok_or_else(|| FetchError::Io {
            path: PathBuf::from(path),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}
