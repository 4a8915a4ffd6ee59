//! Folio - content registry and note search for a markdown/pdf blog.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli, Commands};
use folio::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { print } => cli::build::build_registry(&config, *print),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Tags { json } => cli::tags::list_tags(&config, *json),
        Commands::Show { id, json } => cli::show::show_note(&config, id, *json),
    }
}
