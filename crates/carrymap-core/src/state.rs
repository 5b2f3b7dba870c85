//! # State Codes
//!
//! [`StateCode`] is the primary key of every table in carrymap: the law
//! table, the reciprocity graph, and the permitless-carry set.
//!
//! ## Validation
//!
//! A state code is exactly two ASCII letters after trimming. Input is
//! normalized to uppercase, so `"tx"`, `" TX "` and `"Tx"` all produce `TX`.
//! Existence in the dataset is *not* checked here; that is a lookup concern
//! of the table that owns the code.

use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A two-letter U.S. jurisdiction code (50 states plus `DC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StateCode(String);

impl StateCode {
    /// Create a state code, trimming whitespace and normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStateCode`] unless the trimmed input
    /// is exactly two ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidStateCode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// -- Validating Deserialize ---------------------------------------------------

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl FromStr for StateCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Borrow<str> for StateCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
