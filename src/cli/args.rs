//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Content registry and note search for a markdown/pdf blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Registry artifact path, `.json` or `.ts` (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub registry: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the content directory and write the registry
    #[command(visible_alias = "b")]
    Build {
        /// Also print the registry JSON to stdout
        #[arg(short, long)]
        print: bool,
    },

    /// Search and filter notes in the registry
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// List tags with their note counts
    #[command(visible_alias = "t")]
    Tags {
        /// Output JSON instead of text
        #[arg(short, long)]
        json: bool,
    },

    /// Resolve and print a single note body
    #[command(visible_alias = "s")]
    Show {
        /// Note id (file name without extension)
        id: String,

        /// Output record and body as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Free-text search over title, description and tags
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Keep only notes with this tag (exact match)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Keep only notes dated in this year
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl QueryArgs {
    /// Positional words joined back into one search string.
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_and_verbose_flags() {
        let err = Cli::try_parse_from(["folio", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = parse(&["--verbose", "tags"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_query_args() {
        let cli = parse(&["query", "rust", "ownership", "--tag", "Lang", "-y", "2025", "-f", "id,title"]);
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.text(), "rust ownership");
        assert_eq!(args.tag.as_deref(), Some("Lang"));
        assert_eq!(args.year, Some(2025));
        assert_eq!(args.fields, Some(vec!["id".to_string(), "title".to_string()]));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["build", "-v", "-c", "docs/notes", "--registry", "services/registry.ts"]);
        assert!(cli.verbose);
        assert_eq!(cli.content, Some(PathBuf::from("docs/notes")));
        assert_eq!(cli.registry, Some(PathBuf::from("services/registry.ts")));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["folio", "show"]).is_err());
        let cli = parse(&["show", "blog_development", "--json"]);
        assert!(matches!(cli.command, Commands::Show { ref id, json: true } if id == "blog_development"));
    }
}
