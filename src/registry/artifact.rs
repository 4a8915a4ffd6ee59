//! Registry artifact: the static, loadable list of note records.
//!
//! Two encodings share the same JSON payload:
//!
//! - `.json`: a pretty-printed array
//! - `.ts`: a module exporting `registryData`, importable by the front-end
//!
//! ```text
//! import { NoteMetadata } from '../types';
//!
//! export const registryData: NoteMetadata[] = [ ... ];
//! ```

use std::fs;
use std::path::Path;

use super::RegistryError;
use crate::note::NoteRecord;

const TS_HEADER: &str = "import { NoteMetadata } from '../types';\n\n";
const TS_EXPORT: &str = "export const registryData: NoteMetadata[] = ";
const TS_BINDING: &str = "registryData";

/// Artifact encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    TypeScript,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ts") => Self::TypeScript,
            _ => Self::Json,
        }
    }
}

/// Encode records in the given format.
pub fn render(notes: &[NoteRecord], format: ArtifactFormat) -> Result<String, RegistryError> {
    let json = serde_json::to_string_pretty(notes)?;
    Ok(match format {
        ArtifactFormat::Json => json,
        ArtifactFormat::TypeScript => format!("{TS_HEADER}{TS_EXPORT}{json};"),
    })
}

/// Write the artifact, creating parent directories as needed.
pub fn write_artifact(path: &Path, notes: &[NoteRecord]) -> Result<(), RegistryError> {
    let content = render(notes, ArtifactFormat::from_path(path))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RegistryError::Write(path.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| RegistryError::Write(path.to_path_buf(), e))
}

/// Read an artifact written by [`write_artifact`].
pub fn read_artifact(path: &Path) -> Result<Vec<NoteRecord>, RegistryError> {
    let content =
        fs::read_to_string(path).map_err(|e| RegistryError::ReadArtifact(path.to_path_buf(), e))?;
    parse(&content, ArtifactFormat::from_path(path)).map_err(|message| RegistryError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Decode artifact content. Errors are human-readable messages.
pub fn parse(content: &str, format: ArtifactFormat) -> Result<Vec<NoteRecord>, String> {
    let json = match format {
        ArtifactFormat::Json => content,
        ArtifactFormat::TypeScript => ts_payload(content)?,
    };
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// The array literal assigned to `registryData`.
fn ts_payload(content: &str) -> Result<&str, String> {
    let binding = content
        .find(TS_BINDING)
        .ok_or_else(|| format!("missing `{TS_BINDING}` export"))?;
    let after = &content[binding..];
    let eq = after
        .find('=')
        .ok_or_else(|| format!("missing `=` after `{TS_BINDING}`"))?;
    let value = after[eq + 1..].trim();
    Ok(value.strip_suffix(';').unwrap_or(value).trim_end())
}
