//! # carrymap-core: Foundational Types
//!
//! The leaf crate of the carrymap workspace. Every other crate depends on
//! `carrymap-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated state codes.** [`StateCode`] is a newtype over a two-letter
//!    uppercase code. No bare strings cross a crate boundary as identifiers.
//!
//! 2. **Closed enumerations.** [`PermitType`], [`CarryRule`] and
//!    [`ReciprocityStatus`] are exhaustive enums. Adding a variant forces
//!    every `match` in the workspace to handle it at compile time.
//!
//! 3. **Explicit "no limit".** [`MagazineLimit`] distinguishes `NoLimit`
//!    from a concrete round count instead of overloading `0` or `null`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `carrymap-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod law;
pub mod state;
pub mod status;

pub use error::ValidationError;
pub use law::{CarryRule, MagazineLimit, PermitType, StateLaw};
pub use state::StateCode;
pub use status::ReciprocityStatus;
