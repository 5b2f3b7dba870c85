//! Pack-specific error types.
//!
//! Every variant here is fatal to dataset initialization. Non-fatal
//! data-quality observations are [`Finding`](crate::validation::Finding)s
//! and live in the validation report instead.

use std::path::PathBuf;

use carrymap_core::StateCode;
use thiserror::Error;

/// Errors that can occur while loading or validating a dataset.
#[derive(Debug, Error)]
pub enum PackError {
    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The same state code appears twice in one table.
    #[error("duplicate {table} entry for {code}")]
    DuplicateEntry { table: &'static str, code: StateCode },

    /// A table references a state that has no law record.
    #[error("{context} references {code}, which has no law record")]
    DanglingReference { context: String, code: StateCode },

    /// A law record has no reciprocity graph entry.
    #[error("{code} has a law record but no reciprocity entry")]
    MissingGraphEntry { code: StateCode },

    /// Asymmetric edges were found and the policy forbids them.
    #[error("{count} asymmetric reciprocity edge(s) rejected by policy")]
    AsymmetryRejected { count: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
