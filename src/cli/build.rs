//! `folio build`: content directory to registry artifact.

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::log;
use crate::registry::{self, RegistryBuilder};

pub fn build_registry(config: &SiteConfig, print: bool) -> Result<()> {
    let builder = RegistryBuilder::from_config(config);
    log!("build"; "scanning {}", config.root_relative(builder.content_dir()).display());

    let notes = builder.build().context("registry build failed")?;
    log!("build"; "found {}", registry::summarize(&notes));

    let path = &config.build.registry;
    registry::write_artifact(path, &notes)?;
    log!("build"; "wrote {}", config.root_relative(path).display());

    if print {
        println!("{}", registry::render(&notes, registry::ArtifactFormat::Json)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Library;
    use std::fs;
    use tempfile::TempDir;

    fn config(root: &std::path::Path, registry: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.build.registry = registry.into();
        config.resolve_paths();
        config
    }

    #[test]
    fn test_build_writes_loadable_registry() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path(), "services/registry.ts");
        fs::create_dir_all(&config.build.content).unwrap();
        fs::write(config.build.content.join("hello.md"), "# Hello\n[tag]: Intro").unwrap();

        build_registry(&config, false).unwrap();

        let library = Library::load(&config.build.registry).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(library.notes()[0].path, "notes/hello.md");
        assert_eq!(library.notes()[0].tags, ["Intro"]);
    }

    #[test]
    fn test_build_creates_missing_content_dir() {
        let temp = TempDir::new().unwrap();
        let config = config(temp.path(), "services/registry.json");

        build_registry(&config, false).unwrap();

        assert!(config.build.content.is_dir());
        assert!(Library::load(&config.build.registry).unwrap().is_empty());
    }
}
