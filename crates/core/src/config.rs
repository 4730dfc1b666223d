//! Configuration via `fts.toml`
//!
//! A single file selects the analysis language and controls the synthetic
//! warm-up corpus loaded at startup. Missing keys fall back to defaults, so
//! an empty file is a valid configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Config file name looked up when no path is given.
pub const CONFIG_FILE_NAME: &str = "fts.toml";

/// Log levels accepted in `log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Language
// ============================================================================

/// Analysis language: selects the stop-word set and the Snowball stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian prepositions as stop words, Snowball Russian stemmer
    #[default]
    Russian,
    /// Lucene's English stop words, Snowball English (Porter2) stemmer
    English,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Russian => f.write_str("russian"),
            Language::English => f.write_str("english"),
        }
    }
}

// ============================================================================
// WarmupConfig
// ============================================================================

/// Synthetic corpus generated at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupConfig {
    /// Number of documents to generate
    #[serde(default = "default_documents")]
    pub documents: usize,
    /// Upper bound (exclusive) on words per document
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Log progress every N documents
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
    /// Word list, one word per line; built-in list when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list: Option<PathBuf>,
    /// RNG seed; entropy-seeded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_documents() -> usize {
    150_000
}

fn default_max_words() -> usize {
    32
}

fn default_progress_every() -> usize {
    5_000
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
            max_words: default_max_words(),
            progress_every: default_progress_every(),
            word_list: None,
            seed: None,
        }
    }
}

// ============================================================================
// FtsConfig
// ============================================================================

/// Engine configuration loaded from `fts.toml`.
///
/// # Example
///
/// ```toml
/// language = "english"
/// log_level = "debug"
///
/// [warmup]
/// documents = 1000
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtsConfig {
    /// Analysis language
    #[serde(default)]
    pub language: Language,
    /// Default log level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Warm-up corpus settings
    #[serde(default)]
    pub warmup: WarmupConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FtsConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_level: default_log_level(),
            warmup: WarmupConfig::default(),
        }
    }
}

impl FtsConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# fts configuration
#
# Analysis language: "russian" (default) or "english".
# Selects the stop-word set and the Snowball stemmer.
language = "russian"

# Log level used when RUST_LOG is not set: trace, debug, info, warn, error
log_level = "info"

[warmup]
# Synthetic documents generated at startup
documents = 150000
# Each document gets 0..max_words words drawn from the word list
max_words = 32
# Log progress every N documents
progress_every = 5000
# word_list = "words.txt"   # one word per line; built-in list if absent
# seed = 42                 # RNG seed; random if absent
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML and `Error::InvalidInput`
    /// when a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FtsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for an unknown log level or a zero
    /// progress interval.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::invalid_input(format!(
                "Invalid log_level '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.warmup.progress_every == 0 {
            return Err(Error::invalid_input("warmup.progress_every must be > 0"));
        }
        Ok(())
    }
}
