//! fts CLI: warm up an in-memory index and answer queries.
//!
//! Modes:
//! - **Shell mode**: `fts search red fox` runs a single query and exits
//! - **REPL mode**: `fts` opens an interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "red fox" | fts` reads one query per stdin line
//!
//! Logs go to stderr so stdout carries only results.

mod commands;
mod corpus;
mod format;
mod repl;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::ArgMatches;
use fts_core::{FtsConfig, Result, CONFIG_FILE_NAME};
use fts_search::Index;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, query_text};
use corpus::CorpusGenerator;
use format::{format_error, format_results, OutputMode};

fn main() {
    let matches = build_cli().get_matches();
    let mode = output_mode(&matches);

    if let Err(e) = run(&matches, mode) {
        eprintln!("{}", format_error(&e, mode));
        process::exit(1);
    }
}

fn run(matches: &ArgMatches, mode: OutputMode) -> Result<()> {
    if matches.subcommand_name() == Some("init") {
        let path = config_path(matches).unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        FtsConfig::write_default_if_missing(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = load_config(matches)?;
    init_logging(&config.log_level);
    info!(
        target: "fts::cli",
        language = %config.language,
        documents = config.warmup.documents,
        "Starting"
    );

    let index = Index::with_language(config.language);
    let words = corpus::load_words(config.warmup.word_list.as_deref())?;
    let mut generator = CorpusGenerator::new(words, config.warmup.max_words, config.warmup.seed);
    corpus::warm_up(&index, &mut generator, &config.warmup)?;

    if let Some(("search", sub)) = matches.subcommand() {
        let hits = index.search(&query_text(sub));
        let formatted = format_results(&hits, mode);
        if !formatted.is_empty() {
            println!("{}", formatted);
        }
    } else if io::stdin().is_terminal() {
        repl::run_repl(&index, mode)?;
    } else {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        repl::run_pipe(&index, stdin.lock(), &mut stdout, mode)?;
    }

    info!(target: "fts::cli", "Shutdown");
    Ok(())
}

/// Matches of the subcommand if one was given; global flags land there.
fn leaf(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map(|(_, sub)| sub).unwrap_or(matches)
}

fn output_mode(matches: &ArgMatches) -> OutputMode {
    let leaf = leaf(matches);
    if leaf.get_flag("json") || matches.get_flag("json") {
        OutputMode::Json
    } else if leaf.get_flag("raw") || matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    }
}

fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    leaf(matches)
        .get_one::<String>("config")
        .or_else(|| matches.get_one::<String>("config"))
        .map(PathBuf::from)
}

/// Config from `--config`, else `./fts.toml` if present, else defaults;
/// then command-line overrides.
fn load_config(matches: &ArgMatches) -> Result<FtsConfig> {
    let mut config = match config_path(matches) {
        Some(path) => FtsConfig::from_file(&path)?,
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            FtsConfig::from_file(Path::new(CONFIG_FILE_NAME))?
        }
        None => FtsConfig::default(),
    };

    let leaf = leaf(matches);
    if let Some(&documents) = leaf
        .get_one::<usize>("documents")
        .or_else(|| matches.get_one::<usize>("documents"))
    {
        config.warmup.documents = documents;
    }
    if let Some(&seed) = leaf
        .get_one::<u64>("seed")
        .or_else(|| matches.get_one::<u64>("seed"))
    {
        config.warmup.seed = Some(seed);
    }
    Ok(config)
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
