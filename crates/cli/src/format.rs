//! Search results → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): numbered `id: text` lines, `(empty list)` on no match
//! - **JSON** (`--json`): `{"result": [{"id", "description"}]}`
//! - **Raw** (`--raw`): one id per line

use fts_core::{Document, Error};
use fts_search::IndexStats;
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

#[derive(Serialize)]
struct ResponseDocument<'a> {
    id: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct Response<'a> {
    result: Vec<ResponseDocument<'a>>,
}

/// Format the documents matched by a query.
pub fn format_results(docs: &[Document], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let response = Response {
                result: docs
                    .iter()
                    .map(|d| ResponseDocument {
                        id: d.id.as_str(),
                        description: &d.text,
                    })
                    .collect(),
            };
            to_json(&response)
        }
        OutputMode::Raw => docs
            .iter()
            .map(|d| d.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            if docs.is_empty() {
                return "(empty list)".to_string();
            }
            docs.iter()
                .enumerate()
                .map(|(i, d)| format!("{}) {}: {}", i + 1, d.id, d.text))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Format index statistics.
pub fn format_stats(stats: &IndexStats, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(stats),
        OutputMode::Raw => format!("{} {} {}", stats.documents, stats.terms, stats.postings),
        OutputMode::Human => format!(
            "documents: {}\nterms: {}\npostings: {}",
            stats.documents, stats.terms, stats.postings
        ),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}
