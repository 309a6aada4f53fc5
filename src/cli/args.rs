/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};

/// gncli — search and inspect records in a geographic metadata catalog.
#[derive(Debug, Parser)]
#[command(
    name = "gncli",
    about = "Search and inspect GeoNetwork catalog records from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: pretty when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Catalog base URL. Defaults to the production endpoint.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log request and decoding detail to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: pretty when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// Full normalized result as JSON (pretty-printed).
    Json,
    /// One line per record: "[uuid] title".
    Compact,
    /// Multi-line record blocks (human-readable).
    Pretty,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search records by free-text query.
    Search(SearchArgs),
    /// List records without a query filter.
    List(ListArgs),
    /// Fetch a single record by UUID.
    Get(GetArgs),
    /// Summarize the catalog: totals, resource types, schemas.
    Stats,
}

/// Arguments for `gncli search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search terms. Multiple words are joined into one query.
    #[arg(required = true, value_name = "QUERY")]
    pub query: Vec<String>,

    /// Zero-based offset of the first result.
    #[arg(short, long, value_name = "N", default_value = "0")]
    pub from: usize,

    /// Number of results per page.
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "10",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub size: usize,
}

/// Arguments for `gncli list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Zero-based offset of the first result.
    #[arg(short, long, value_name = "N", default_value = "0")]
    pub from: usize,

    /// Number of results per page.
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "10",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub size: usize,
}

/// Arguments for `gncli get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Record UUID.
    #[arg(value_name = "UUID")]
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["gncli", "search", "uso", "do", "solo"]).unwrap();

        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, vec!["uso", "do", "solo"]);
                assert_eq!(args.from, 0);
                assert_eq!(args.size, 10);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_size_zero_is_rejected() {
        assert!(Cli::try_parse_from(["gncli", "search", "agua", "--size", "0"]).is_err());
        assert!(Cli::try_parse_from(["gncli", "list", "-s", "0"]).is_err());
    }

    #[test]
    fn test_size_lower_bound_is_inclusive() {
        let cli = Cli::try_parse_from(["gncli", "list", "-s", "1"]).unwrap();

        match cli.command {
            Command::List(args) => assert_eq!(args.size, 1),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_a_query() {
        assert!(Cli::try_parse_from(["gncli", "search"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_output() {
        let result = Cli::try_parse_from(["gncli", "--json", "--output", "pretty", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_window_flags() {
        let cli = Cli::try_parse_from(["gncli", "search", "vias", "-f", "20", "-s", "5"]).unwrap();

        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.from, 20);
                assert_eq!(args.size, 5);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }
}
