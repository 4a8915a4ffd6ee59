//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── extract    # [extract]
//! │   └── search     # [search]
//! ├── types/         # ConfigError, ConfigDiagnostics
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: without one, defaults apply and the
//! working directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_against};

pub use section::{BuildSectionConfig, DEFAULT_URL_PREFIX, ExtractConfig, SearchConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. CLI overrides are
    /// applied before paths are resolved against the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.resolve_paths();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli overrides and paths
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.registry, cli.registry.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve build paths against the project root.
    pub fn resolve_paths(&mut self) {
        let root = self.root.clone();
        self.build.public = resolve_against(&root, &self.build.public);
        self.build.content = resolve_against(&root, &self.build.content);
        self.build.registry = resolve_against(&root, &self.build.registry);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, reporting every error at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate(&mut diag);
        self.extract.validate(&mut diag);
        self.search.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)?;

        let content = &self.build.content;
        if content.exists() && !content.is_dir() {
            return Err(ConfigError::Validation(format!(
                "content path `{}` is not a directory",
                content.display()
            ))
            .into());
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.build.content, PathBuf::from("public/notes"));
        assert_eq!(config.build.url_prefix, "notes");
        assert_eq!(config.extract.default_tag, "Archive");
        assert_eq!(config.extract.description_limit, 150);
        assert_eq!(config.search.threshold, 0.35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_str_partial() {
        let config = SiteConfig::from_str(
            "[extract]\ndefault_tag = \"Uncategorized\"\n[search]\nthreshold = 0.2",
        )
        .unwrap();
        assert_eq!(config.extract.default_tag, "Uncategorized");
        assert_eq!(config.extract.description_limit, 150);
        assert_eq!(config.search.threshold, 0.2);
        assert_eq!(config.search.distance, 100);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[build\ncontent = \"x\"").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\ncontent = \"notes\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.build.content, PathBuf::from("notes"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[search]\ndistance = 50").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.search.threshold = 1.5;
        config.extract.default_tag = "  ".to_string();
        config.extract.description_limit = 0;
        config.build.url_prefix = "https://cdn.example.com/notes".to_string();

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.errors().len(), 4);
    }

    #[test]
    fn test_validate_content_must_be_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("notes.md");
        fs::write(&file, "# not a dir").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = file;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/blog"));
        config.resolve_paths();
        assert_eq!(config.build.content, PathBuf::from("/blog/public/notes"));
        assert_eq!(config.build.public, PathBuf::from("/blog/public"));
        assert_eq!(
            config.root_relative(&config.build.registry),
            PathBuf::from("services/registry.json")
        );
    }
}
