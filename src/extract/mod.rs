//! Metadata extraction: one content file in, one `NoteRecord` out.
//!
//! | Rule          | Markdown                                   | PDF                      |
//! |---------------|--------------------------------------------|--------------------------|
//! | `id`          | file stem                                  | file stem                |
//! | `title`       | first `# ` heading, else id-derived        | id-derived, upper-cased  |
//! | `tags`        | `[tag]:` directive, else sentinel          | sentinel                 |
//! | `description` | `[description]:`, first body line, fallback| fallback                 |
//! | `date`        | mtime (UTC date)                           | mtime (UTC date)         |
//! | `path`        | `<url_prefix>/<file name>`                 | `<url_prefix>/<file name>` |
//!
//! Files with any other extension are skipped. Missing metadata is always
//! resolved by defaulting, never reported as an error.

pub mod directive;
pub mod markdown;

use std::path::Path;
use std::time::SystemTime;

use crate::config::{ExtractConfig, SiteConfig};
use crate::note::{NoteRecord, NoteType};
use crate::utils::date::DateTimeUtc;

/// Placeholder in `fallback_description` replaced by the note title.
const TITLE_PLACEHOLDER: &str = "{title}";

/// Derives note records from content files.
#[derive(Debug, Clone)]
pub struct Extractor {
    options: ExtractConfig,
    url_prefix: String,
}

impl Extractor {
    pub fn new(options: ExtractConfig, url_prefix: impl Into<String>) -> Self {
        Self {
            options,
            url_prefix: url_prefix.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.extract.clone(), config.build.url_prefix.clone())
    }

    /// Extract a record, or `None` when the extension is not a note type.
    ///
    /// `content` is only read for markdown files.
    pub fn extract(&self, path: &Path, content: &[u8], modified: SystemTime) -> Option<NoteRecord> {
        let note_type = NoteType::from_path(path)?;
        let id = path.file_stem()?.to_string_lossy().into_owned();
        let file_name = path.file_name()?.to_string_lossy();
        let derived_title = title_from_id(&id);

        let (title, tags, description) = match note_type {
            NoteType::Markdown => {
                let text = String::from_utf8_lossy(content);
                let title = markdown::first_heading(&text)
                    .map(str::to_string)
                    .unwrap_or(derived_title);
                let tags = markdown::tags(&text);
                let description = markdown::description(&text, self.options.description_limit);
                (title, tags, description)
            }
            NoteType::Pdf => (derived_title.to_uppercase(), Vec::new(), String::new()),
        };

        let tags = if tags.is_empty() {
            vec![self.options.default_tag.clone()]
        } else {
            tags
        };
        let description = if description.is_empty() {
            self.fallback_description(&title)
        } else {
            description
        };

        Some(NoteRecord {
            id,
            date: DateTimeUtc::from_system_time(modified).date(),
            path: self.site_path(&file_name),
            title,
            tags,
            description,
            note_type,
        })
    }

    /// Generated description used when a note has none.
    pub fn fallback_description(&self, title: &str) -> String {
        self.options
            .fallback_description
            .replace(TITLE_PLACEHOLDER, title)
    }

    fn site_path(&self, file_name: &str) -> String {
        let prefix = self.url_prefix.trim_matches('/');
        if prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{prefix}/{file_name}")
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default(), crate::config::DEFAULT_URL_PREFIX)
    }
}

/// `my-first_note` -> `my first note`
fn title_from_id(id: &str) -> String {
    id.replace(['-', '_'], " ")
}
