//! # Reciprocity Engine
//!
//! [`ReciprocityEngine`] owns a validated [`Dataset`] and answers every
//! query against it. It holds no interior mutability, so it is `Send +
//! Sync` and can be shared behind an `Arc` without locking.
//!
//! State codes are accepted as `&str` and normalized (`"tx"` → `TX`).
//! Malformed codes and codes with no law record are errors; no query falls
//! back to a default answer.

use std::collections::BTreeMap;

use carrymap_core::{ReciprocityStatus, StateCode, StateLaw};
use carrymap_pack::{Dataset, LoadOptions, ValidationReport};

use crate::compare::{self, ComparisonField, StateComparison};
use crate::error::ReciprocityResult;
use crate::reach::{self, NationalStats, ReciprocityBreakdown, ReciprocitySummary};
use crate::resolver;
use crate::shade::MapShade;

/// Query interface over one dataset.
#[derive(Debug, Clone)]
pub struct ReciprocityEngine {
    data: Dataset,
}

impl ReciprocityEngine {
    pub fn new(data: Dataset) -> Self {
        tracing::debug!(
            states = data.laws.len(),
            findings = data.report.findings.len(),
            "reciprocity engine ready"
        );
        Self { data }
    }

    /// Build an engine over the embedded dataset.
    pub fn embedded(options: &LoadOptions) -> ReciprocityResult<Self> {
        Ok(Self::new(Dataset::embedded(options)?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    /// Findings collected when the dataset was assembled.
    pub fn report(&self) -> &ValidationReport {
        &self.data.report
    }

    // -- Lookup -------------------------------------------------------------

    /// All jurisdictions, ascending by state code.
    pub fn all_states(&self) -> &[StateLaw] {
        self.data.laws.all()
    }

    pub fn law(&self, code: &str) -> ReciprocityResult<&StateLaw> {
        resolver::lookup(&self.data, code)
    }

    /// Resolve a display name to its code. Case-insensitive.
    pub fn code_for_name(&self, name: &str) -> Option<&StateCode> {
        self.data.laws.code_for_name(name)
    }

    // -- Status -------------------------------------------------------------

    pub fn resolve_status(&self, home: &str, target: &str) -> ReciprocityResult<ReciprocityStatus> {
        resolver::resolve_status(&self.data, home, target)
    }

    /// Status of every jurisdiction for one home state.
    pub fn status_map(
        &self,
        home: &str,
    ) -> ReciprocityResult<BTreeMap<StateCode, ReciprocityStatus>> {
        reach::status_map(&self.data, home)
    }

    /// Map fill for `state`. With no home the fill reflects the state's own
    /// law; with a home it reflects the status for that home.
    pub fn shade(&self, home: Option<&str>, state: &str) -> ReciprocityResult<MapShade> {
        match home {
            None => Ok(MapShade::for_law(self.law(state)?)),
            Some(home) => Ok(MapShade::for_status(self.resolve_status(home, state)?)),
        }
    }

    // -- Reach --------------------------------------------------------------

    pub fn states_honoring_permit(&self, state: &str) -> ReciprocityResult<Vec<StateCode>> {
        reach::states_honoring_permit(&self.data, state)
    }

    pub fn reciprocity_summary(&self, state: &str) -> ReciprocityResult<ReciprocitySummary> {
        reach::reciprocity_summary(&self.data, state)
    }

    pub fn carry_reach_count(&self, home: &str) -> ReciprocityResult<usize> {
        reach::carry_reach_count(&self.data, home)
    }

    pub fn reciprocity_breakdown(&self, home: &str) -> ReciprocityResult<ReciprocityBreakdown> {
        reach::reciprocity_breakdown(&self.data, home)
    }

    pub fn national_stats(&self) -> NationalStats {
        reach::national_stats(&self.data)
    }

    // -- Comparison ---------------------------------------------------------

    pub fn compare_laws(&self, a: &str, b: &str) -> ReciprocityResult<Vec<ComparisonField>> {
        Ok(compare::compare_laws(self.law(a)?, self.law(b)?))
    }

    pub fn travel_warnings(&self, a: &str, b: &str) -> ReciprocityResult<Vec<String>> {
        let (law_a, law_b) = (self.law(a)?, self.law(b)?);
        let a_to_b = resolver::resolve_known(&self.data, &law_a.state_code, &law_b.state_code);
        let b_to_a = resolver::resolve_known(&self.data, &law_b.state_code, &law_a.state_code);
        Ok(compare::travel_warnings(law_a, law_b, a_to_b, b_to_a))
    }

    /// Fields, warnings and statuses for one ordered pair.
    pub fn compare(&self, a: &str, b: &str) -> ReciprocityResult<StateComparison<'_>> {
        let (law_a, law_b) = (self.law(a)?, self.law(b)?);
        let a_to_b = resolver::resolve_known(&self.data, &law_a.state_code, &law_b.state_code);
        let b_to_a = resolver::resolve_known(&self.data, &law_b.state_code, &law_a.state_code);
        Ok(StateComparison::new(law_a, law_b, a_to_b, b_to_a))
    }
}
