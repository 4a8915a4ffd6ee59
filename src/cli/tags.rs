//! `folio tags`: tag cloud of the registry.

use anyhow::Result;

use super::common::{load_engine, to_json};
use crate::config::SiteConfig;
use crate::log;
use crate::search::TagCount;
use crate::utils::plural_count;

pub fn list_tags(config: &SiteConfig, json: bool) -> Result<()> {
    let engine = load_engine(config)?;
    let tags = engine.tags();

    if json {
        println!("{}", to_json(tags.cloud(), true)?);
        return Ok(());
    }

    if tags.is_empty() {
        log!("tags"; "no tags found");
        return Ok(());
    }
    log!(
        "tags";
        "{} across {}",
        plural_count(tags.len(), "tag"),
        plural_count(engine.library().len(), "note")
    );
    for line in format_cloud(tags.cloud()) {
        println!("{line}");
    }
    Ok(())
}

/// One `count  tag` line per tag, counts right-aligned.
fn format_cloud(cloud: &[TagCount]) -> Vec<String> {
    let width = cloud
        .iter()
        .map(|t| t.count.to_string().len())
        .max()
        .unwrap_or(1);
    cloud
        .iter()
        .map(|t| format!("{:>width$}  {}", t.count, t.tag))
        .collect()
}
