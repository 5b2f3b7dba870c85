//! # Status Resolution
//!
//! Decides the carry status of a target state for a holder of a home
//! state's permit. Rules are evaluated in strict precedence; the first
//! match wins:
//!
//! | # | Condition                         | Status       |
//! |---|-----------------------------------|--------------|
//! | 1 | home == target                    | `home`       |
//! | 2 | target is permitless              | `permitless` |
//! | 3 | target has no reciprocity entry   | `none`       |
//! | 4 | target honors home's permit       | `full`       |
//! | 5 | otherwise                         | `none`       |
//!
//! Rule 2 ignores the visitor's home state entirely. Rule 3 cannot fire on
//! a dataset that passed referential checks, but a hand-assembled
//! [`Dataset`] may still reach it.

use carrymap_core::{ReciprocityStatus, StateCode, StateLaw};
use carrymap_pack::Dataset;

use crate::error::{ReciprocityError, ReciprocityResult};

/// Normalize `raw` and find its law record.
///
/// # Errors
///
/// [`ReciprocityError::InvalidCode`] for malformed input,
/// [`ReciprocityError::UnknownState`] for a code with no law record.
pub fn lookup<'d>(data: &'d Dataset, raw: &str) -> ReciprocityResult<&'d StateLaw> {
    let code = StateCode::new(raw)?;
    data.laws
        .get(code.as_str())
        .ok_or(ReciprocityError::UnknownState(code))
}

/// Resolve the status of `target` for a holder of a `home` permit.
pub fn resolve_status(
    data: &Dataset,
    home: &str,
    target: &str,
) -> ReciprocityResult<ReciprocityStatus> {
    let home = &lookup(data, home)?.state_code;
    let target = &lookup(data, target)?.state_code;
    Ok(resolve_known(data, home, target))
}

/// Rule evaluation for codes already known to exist.
pub(crate) fn resolve_known(
    data: &Dataset,
    home: &StateCode,
    target: &StateCode,
) -> ReciprocityStatus {
    if home == target {
        return ReciprocityStatus::Home;
    }
    if data.permitless.contains(target.as_str()) {
        return ReciprocityStatus::Permitless;
    }
    match data.graph.honors(target.as_str()) {
        None => ReciprocityStatus::None,
        Some(honors) if honors.contains(home) => ReciprocityStatus::Full,
        Some(_) => ReciprocityStatus::None,
    }
}
