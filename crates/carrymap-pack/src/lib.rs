//! # carrymap-pack: Reference Data
//!
//! Loads and validates the three reference tables every carrymap query
//! reads:
//!
//! - **Law table** (`laws.rs`): one [`StateLaw`](carrymap_core::StateLaw)
//!   per jurisdiction, keyed by state code.
//! - **Reciprocity graph** (`graph.rs`): which states honor which permits,
//!   with the inverse relation derived from the forward edges.
//! - **Permitless set** (`permitless.rs`): jurisdictions where no permit is
//!   needed to carry.
//!
//! [`Dataset`] assembles all three, runs referential checks (fatal) and
//! data-quality checks (reported, see `validation.rs`), and is read-only
//! afterwards.
//!
//! ## Crate Policy
//!
//! - Depends only on `carrymap-core` internally.
//! - No query logic. Status resolution lives in `carrymap-reciprocity`.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod laws;
pub mod permitless;
pub mod validation;

#[cfg(test)]
pub(crate) mod testutil;

pub use dataset::{Dataset, DatasetPaths, LoadOptions};
pub use error::{PackError, PackResult};
pub use graph::{ReciprocityEntry, ReciprocityGraph};
pub use laws::LawTable;
pub use permitless::PermitlessSet;
pub use validation::{AsymmetryPolicy, Finding, ValidationReport};
