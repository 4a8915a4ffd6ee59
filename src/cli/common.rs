//! Common utilities shared across CLI commands.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::log;
use crate::note::Library;
use crate::search::QueryEngine;

/// Load the registry artifact written by `folio build`.
pub fn load_library(config: &SiteConfig) -> Result<Library> {
    let path = &config.build.registry;
    Library::load(path).with_context(|| {
        format!(
            "cannot load registry {}, run `folio build` first",
            config.root_relative(path).display()
        )
    })
}

/// Query engine over the loaded registry.
pub fn load_engine(config: &SiteConfig) -> Result<QueryEngine> {
    Ok(QueryEngine::new(load_library(config)?, config.search))
}

/// Serialize `value` as JSON.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write command output to a file, or stdout when `output` is `None`.
pub fn emit(module: &str, text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            writeln!(file, "{text}")?;
            log!(module; "wrote output to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
