//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("fts")
        .about("In-memory full-text search over a synthetic corpus")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file (default: ./fts.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("documents")
                .long("documents")
                .short('n')
                .help("Override warmup.documents")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Override warmup.seed")
                .value_parser(value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (ids only)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("search")
                .about("Warm up, run one query and exit")
                .arg(
                    Arg::new("query")
                        .help("Query text; all terms must match")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(Command::new("init").about("Write a default fts.toml if missing"))
}

/// Query words of the `search` subcommand joined back into one string.
pub fn query_text(matches: &clap::ArgMatches) -> String {
    matches
        .get_many::<String>("query")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_search_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["fts", "--json", "-n", "10", "search", "red", "fox"])
            .unwrap();
        assert!(matches.get_flag("json"));
        assert_eq!(matches.get_one::<usize>("documents"), Some(&10));

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "search");
        assert_eq!(query_text(sub), "red fox");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["fts", "search", "fox", "--seed", "7"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<u64>("seed"), Some(&7));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(build_cli().try_get_matches_from(["fts", "search"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_raw() {
        assert!(build_cli()
            .try_get_matches_from(["fts", "--json", "--raw"])
            .is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let matches = build_cli().try_get_matches_from(["fts"]).unwrap();
        assert!(matches.subcommand().is_none());
        assert!(matches.get_one::<String>("config").is_none());
    }
}
