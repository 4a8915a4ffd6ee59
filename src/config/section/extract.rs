//! `[extract]` section: metadata defaulting rules.
//!
//! ```toml
//! [extract]
//! default_tag = "Archive"
//! description_limit = 150
//! fallback_description = "Technical entry for {title}"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Sentinel tag for notes without a tag directive.
    pub default_tag: String,

    /// Characters kept when a description is taken from the body.
    pub description_limit: usize,

    /// Description used when none can be derived. `{title}` is substituted.
    pub fallback_description: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            default_tag: "Archive".into(),
            description_limit: 150,
            fallback_description: "Technical entry for {title}".into(),
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_tag.trim().is_empty() {
            diag.error("extract.default_tag", "sentinel tag must not be blank");
        }
        if self.description_limit == 0 {
            diag.error("extract.description_limit", "must be greater than 0");
        }
        if self.fallback_description.trim().is_empty() {
            diag.error_with_hint(
                "extract.fallback_description",
                "fallback description must not be blank",
                "e.g. \"Technical entry for {title}\"",
            );
        }
    }
}
