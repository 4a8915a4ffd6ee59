//! `folio query`: search the registry from the command line.
//!
//! Results go to stdout as a JSON array of records, most recent first.

mod output;

use anyhow::Result;

use super::common::load_engine;
use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::search::NoteQuery;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let engine = load_engine(config)?;
    let query = NoteQuery {
        text: args.text(),
        tag: args.tag.clone(),
        year: args.year,
    };

    let results = engine.run(&query);
    if results.is_empty() {
        log!("query"; "no notes found");
        return Ok(());
    }

    log!(
        "query";
        "found {} of {}",
        plural_count(results.len(), "note"),
        engine.library().len()
    );
    output::output_results(&results, args)
}
