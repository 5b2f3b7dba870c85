//! # Error Types
//!
//! Construction-time validation errors for core primitives. Higher layers
//! (dataset loading, the reciprocity engine) define their own error enums
//! and wrap these where needed.

use thiserror::Error;

/// A core primitive was constructed from malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// State codes are exactly two ASCII letters.
    #[error("invalid state code {0:?}: expected two ASCII letters (e.g. \"TX\")")]
    InvalidStateCode(String),

    /// A magazine limit of zero rounds is not a limit, it is a ban, and the
    /// law table has no way to express that. Use `null` for "no limit".
    #[error("invalid magazine limit: 0 rounds (use null for no limit)")]
    ZeroMagazineLimit,
}
