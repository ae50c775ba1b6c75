//! CLI support for json-graft
//!
//! Provides programmatic access to the `graft` commands so other tools can
//! embed them without spawning a process.

mod docs;
mod edit;
mod merge;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use edit::{GetOptions, PatchOptions, execute_get, execute_patch, parse_assignment};
pub use merge::{MergeOptions, execute_merge};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Graft(#[from] crate::GraftError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Nothing found at '{0}'")]
    NotFound(String),

    #[error("Invalid assignment '{0}': expected PATH=VALUE")]
    InvalidAssignment(String),

    #[error("Unknown category: '{0}'\nRun 'graft docs' to see available categories.")]
    UnknownCategory(String),
}
