//! CLI commands and argument parsing

use crate::query::RawFilters;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch records from a paginated catalog API
#[derive(Parser, Debug)]
#[command(name = "catalog-fetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every record, fetching remaining pages concurrently
    All,

    /// List records matching at least one filter
    Search(SearchArgs),
}

/// Filter flags for `search`
///
/// Blank values are ignored, as if the flag was not given.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Name contains
    #[arg(long)]
    pub name: Option<String>,

    /// Status (alive, dead, unknown)
    #[arg(long)]
    pub status: Option<String>,

    /// Species
    #[arg(long)]
    pub species: Option<String>,

    /// Subtype
    #[arg(long = "type")]
    pub subtype: Option<String>,

    /// Gender (female, male, genderless, unknown)
    #[arg(long)]
    pub gender: Option<String>,
}

impl SearchArgs {
    /// Raw filter values as typed
    pub fn to_raw_filters(&self) -> RawFilters {
        RawFilters::new()
            .name(self.name.clone().unwrap_or_default())
            .status(self.status.clone().unwrap_or_default())
            .species(self.species.clone().unwrap_or_default())
            .subtype(self.subtype.clone().unwrap_or_default())
            .gender(self.gender.clone().unwrap_or_default())
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all() {
        let cli = Cli::try_parse_from(["catalog-fetch", "all", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::All));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "catalog-fetch",
            "search",
            "--name",
            "rick",
            "--type",
            "Parasite",
            "--base-url",
            "http://localhost:8080/api/character",
        ])
        .unwrap();

        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        let raw = args.to_raw_filters();
        assert_eq!(raw.name, "rick");
        assert_eq!(raw.subtype, "Parasite");
        assert_eq!(raw.status, "");
        assert_eq!(
            cli.base_url.as_deref(),
            Some("http://localhost:8080/api/character")
        );
    }
}
