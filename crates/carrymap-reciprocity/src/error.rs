//! Engine error types.

use carrymap_core::{StateCode, ValidationError};
use carrymap_pack::PackError;
use thiserror::Error;

/// Errors returned by engine queries.
#[derive(Debug, Error)]
pub enum ReciprocityError {
    /// The code is well-formed but names no jurisdiction in the dataset.
    #[error("unknown state: {0}")]
    UnknownState(StateCode),

    /// The input is not a two-letter state code.
    #[error(transparent)]
    InvalidCode(#[from] ValidationError),

    /// The dataset could not be assembled.
    #[error("dataset error: {0}")]
    Dataset(#[from] PackError),
}

/// Result type alias for engine operations.
pub type ReciprocityResult<T> = Result<T, ReciprocityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_display() {
        let err = ReciprocityError::UnknownState(StateCode::new("PR").unwrap());
        assert_eq!(err.to_string(), "unknown state: PR");
    }

    #[test]
    fn invalid_code_is_transparent() {
        let err = ReciprocityError::from(ValidationError::InvalidStateCode("Texas".into()));
        assert_eq!(
            err.to_string(),
            ValidationError::InvalidStateCode("Texas".into()).to_string()
        );
    }
}
