//! Core types for fts
//!
//! This crate defines the foundational types shared by the workspace:
//! - DocId / Document: the unit the index accepts and returns
//! - Error: error type hierarchy
//! - FtsConfig / Language: configuration loaded from `fts.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod document;
pub mod error;

// Re-export commonly used types
pub use config::{FtsConfig, Language, WarmupConfig, CONFIG_FILE_NAME};
pub use document::{DocId, Document};
pub use error::{Error, Result};
