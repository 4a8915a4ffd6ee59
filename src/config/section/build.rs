//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! public = "public"                     # Site root served to readers
//! content = "public/notes"              # Content root scanned for .md/.pdf
//! url_prefix = "notes"                  # Prefix for NoteRecord.path
//! registry = "services/registry.json"   # Artifact (.json or .ts)
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Default site-relative prefix of note paths.
pub const DEFAULT_URL_PREFIX: &str = "notes";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Site root; record paths are resolved against it when fetching.
    pub public: PathBuf,

    /// Content root (non-recursive) scanned by the registry builder.
    pub content: PathBuf,

    /// Site-relative prefix written into every `NoteRecord.path`.
    pub url_prefix: String,

    /// Registry artifact path. `.ts` writes a TypeScript module, anything else JSON.
    pub registry: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            content: "public/notes".into(),
            url_prefix: DEFAULT_URL_PREFIX.into(),
            registry: "services/registry.json".into(),
        }
    }
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if url::Url::parse(&self.url_prefix).is_ok() {
            diag.error_with_hint(
                "build.url_prefix",
                format!("`{}` is an absolute URL", self.url_prefix),
                "use a site-relative prefix such as \"notes\"",
            );
        }
        if self.registry.file_name().is_none() {
            diag.error("build.registry", "registry path must name a file");
        }
    }
}
