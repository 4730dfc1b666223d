//! Error types for the search engine
//!
//! The indexing core itself is total: `Index::add` and `Index::search` never
//! fail. Errors arise at the boundary (constructing a `DocId` from caller
//! input) and in the bootstrap code (reading configuration and word lists).
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for fts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the fts workspace
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied malformed input (empty document id, bad config value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error (config file, word list)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
