//! Query loop.
//!
//! Interactive mode: rustyline prompt with history.
//! Pipe mode: read queries line by line from stdin.
//!
//! Every non-empty line is a query, except:
//! - `stats`, `quit` and `exit`, which are meta-commands and never searched
//! - lines starting with `#`, which are comments and skipped
//!
//! A query for one of those words alone (or for `#tag`) therefore cannot be
//! issued here; `fts search <query>` takes any text.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use fts_search::Index;

use crate::format::{format_results, format_stats, OutputMode};

/// What a line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Quit,
    Stats,
    Query(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Line::Skip,
        _ if trimmed.starts_with('#') => Line::Skip,
        "quit" | "exit" => Line::Quit,
        "stats" => Line::Stats,
        query => Line::Query(query),
    }
}

/// Execute one line. Returns `false` when the loop should stop.
fn execute_line<W: Write>(
    index: &Index,
    line: &str,
    out: &mut W,
    mode: OutputMode,
) -> io::Result<bool> {
    match classify(line) {
        Line::Skip => Ok(true),
        Line::Quit => Ok(false),
        Line::Stats => {
            writeln!(out, "{}", format_stats(&index.stats(), mode))?;
            Ok(true)
        }
        Line::Query(query) => {
            let hits = index.search(query);
            let formatted = format_results(&hits, mode);
            if !formatted.is_empty() {
                writeln!(out, "{}", formatted)?;
            }
            Ok(true)
        }
    }
}

/// Run queries read from `input` until EOF or `quit`.
pub fn run_pipe<R: BufRead, W: Write>(
    index: &Index,
    input: R,
    out: &mut W,
    mode: OutputMode,
) -> io::Result<()> {
    for line in input.lines() {
        if !execute_line(index, &line?, out, mode)? {
            break;
        }
    }
    out.flush()
}

/// Run the interactive REPL.
pub fn run_repl(index: &Index, mode: OutputMode) -> io::Result<()> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let stdout = io::stdout();

    loop {
        match rl.readline("fts> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let mut out = stdout.lock();
                if !execute_line(index, trimmed, &mut out, mode)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }
    Ok(())
}
