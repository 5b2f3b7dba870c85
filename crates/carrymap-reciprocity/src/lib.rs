//! # carrymap-reciprocity: Reciprocity Determination Engine
//!
//! Answers "may a holder of state A's permit carry in state B?" and the
//! questions built on top of it.
//!
//! - **Resolver** (`resolver.rs`): the five-rule status precedence.
//! - **Reach** (`reach.rs`): who honors a permit, where a resident may
//!   carry, per-home breakdowns and national counts.
//! - **Compare** (`compare.rs`): the twelve-field law comparison and the
//!   ordered travel warnings.
//! - **Shade** (`shade.rs`): map fills and legends for both map views.
//! - **Engine** (`engine.rs`): [`ReciprocityEngine`], the `&str`-keyed
//!   facade over all of the above.
//!
//! Every query is a pure function of the dataset and its arguments.
//!
//! ## Crate Policy
//!
//! - Depends on `carrymap-core` and `carrymap-pack` only.
//! - No I/O beyond what `carrymap-pack` does at load time.

pub mod compare;
pub mod engine;
pub mod error;
pub mod reach;
pub mod resolver;
pub mod shade;

#[cfg(test)]
pub(crate) mod testutil;

pub use compare::{compare_laws, travel_warnings, ComparisonField, StateComparison};
pub use engine::ReciprocityEngine;
pub use error::{ReciprocityError, ReciprocityResult};
pub use reach::{NationalStats, ReciprocityBreakdown, ReciprocitySummary};
pub use shade::{legend, LegendEntry, MapShade};
