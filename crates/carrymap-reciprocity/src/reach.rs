//! # Reach Aggregation
//!
//! Counts and lists derived from the status resolver and the graph:
//! who honors a permit, where a resident may carry, and how the rest of the
//! country breaks down for a given home state.
//!
//! ## Two "can carry" numbers
//!
//! [`ReciprocitySummary::can_carry_in`] is `honored_by_count`, plus one when
//! the state itself is not permitless. [`carry_reach_count`] counts targets
//! that resolve to `full` or `permitless`, plus one for home. The two agree
//! for most states but not all (Arizona: 37 vs 38 on the shipped data). Both
//! are published as-is and neither is derived from the other.

use std::collections::{BTreeMap, BTreeSet};

use carrymap_core::{PermitType, ReciprocityStatus, StateCode};
use carrymap_pack::Dataset;
use serde::Serialize;

use crate::error::ReciprocityResult;
use crate::resolver::{lookup, resolve_known};

/// Aggregate counts for one state's permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReciprocitySummary {
    pub can_carry_in: usize,
    /// States whose permits this state honors.
    pub honors_count: usize,
    /// States that honor this state's permit, permitless states included.
    pub honored_by_count: usize,
}

/// Every other state grouped by status for one home state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReciprocityBreakdown {
    pub home: StateCode,
    pub permitless: Vec<StateCode>,
    pub full: Vec<StateCode>,
    pub partial: Vec<StateCode>,
    pub none: Vec<StateCode>,
    /// `permitless + full + 1`.
    pub can_carry_count: usize,
}

/// Jurisdiction counts across the whole law table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NationalStats {
    pub total: usize,
    pub permitless_carry: usize,
    pub unrestricted: usize,
    pub shall_issue: usize,
    pub may_issue: usize,
    pub no_issue: usize,
    pub red_flag: usize,
}

/// States that honor `state`'s permit: every permitless state plus every
/// state with a `honors` edge to `state`, excluding `state` itself. Sorted
/// ascending and free of duplicates.
pub fn states_honoring_permit(data: &Dataset, state: &str) -> ReciprocityResult<Vec<StateCode>> {
    let code = &lookup(data, state)?.state_code;

    let mut out: BTreeSet<&StateCode> = data.permitless.iter().collect();
    if let Some(derived) = data.graph.honored_by(code.as_str()) {
        out.extend(derived.iter());
    }
    out.remove(code);

    Ok(out.into_iter().cloned().collect())
}

pub fn reciprocity_summary(data: &Dataset, state: &str) -> ReciprocityResult<ReciprocitySummary> {
    let code = &lookup(data, state)?.state_code;
    let honoring = states_honoring_permit(data, code.as_str())?.len();
    let honors_count = data.graph.honors(code.as_str()).map_or(0, |set| set.len());
    let home_bonus = usize::from(!data.permitless.contains(code.as_str()));

    Ok(ReciprocitySummary {
        can_carry_in: honoring + home_bonus,
        honors_count,
        honored_by_count: honoring,
    })
}

/// Number of jurisdictions a resident of `home` may carry in, home
/// included.
pub fn carry_reach_count(data: &Dataset, home: &str) -> ReciprocityResult<usize> {
    let home = &lookup(data, home)?.state_code;
    let visits = data
        .laws
        .codes()
        .filter(|target| resolve_known(data, home, target).permits_visitor_carry())
        .count();
    Ok(visits + 1)
}

/// Status of every jurisdiction, home included, for one home state.
pub fn status_map(
    data: &Dataset,
    home: &str,
) -> ReciprocityResult<BTreeMap<StateCode, ReciprocityStatus>> {
    let home = &lookup(data, home)?.state_code;
    Ok(data
        .laws
        .codes()
        .map(|target| (target.clone(), resolve_known(data, home, target)))
        .collect())
}

pub fn reciprocity_breakdown(data: &Dataset, home: &str) -> ReciprocityResult<ReciprocityBreakdown> {
    let home = lookup(data, home)?.state_code.clone();
    let mut breakdown = ReciprocityBreakdown {
        home: home.clone(),
        permitless: Vec::new(),
        full: Vec::new(),
        partial: Vec::new(),
        none: Vec::new(),
        can_carry_count: 0,
    };

    for target in data.laws.codes() {
        let bucket = match resolve_known(data, &home, target) {
            ReciprocityStatus::Home => continue,
            ReciprocityStatus::Permitless => &mut breakdown.permitless,
            ReciprocityStatus::Full => &mut breakdown.full,
            ReciprocityStatus::Partial => &mut breakdown.partial,
            ReciprocityStatus::None => &mut breakdown.none,
        };
        bucket.push(target.clone());
    }
    breakdown.can_carry_count = breakdown.permitless.len() + breakdown.full.len() + 1;

    Ok(breakdown)
}

pub fn national_stats(data: &Dataset) -> NationalStats {
    let mut stats = NationalStats::default();
    for law in data.laws.all() {
        stats.total += 1;
        if law.permitless_carry {
            stats.permitless_carry += 1;
        }
        if law.red_flag_law {
            stats.red_flag += 1;
        }
        match law.permit_type {
            PermitType::Unrestricted => stats.unrestricted += 1,
            PermitType::ShallIssue => stats.shall_issue += 1,
            PermitType::MayIssue => stats.may_issue += 1,
            PermitType::NoIssue => stats.no_issue += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Fixture;

    fn sample() -> Dataset {
        Fixture::new()
            .state("AZ", &["TX", "FL"])
            .state("TX", &["AZ", "FL", "GA"])
            .state("FL", &["TX", "GA"])
            .state("GA", &["FL", "TX"])
            .state("CA", &[])
            .state("NY", &[])
            .permitless(&["AZ", "TX"])
            .build()
    }

    fn strs(codes: &[StateCode]) -> Vec<&str> {
        codes.iter().map(StateCode::as_str).collect()
    }

    #[test]
    fn honoring_includes_permitless_and_derived_edges() {
        let data = sample();
        assert_eq!(
            strs(&states_honoring_permit(&data, "FL").unwrap()),
            vec!["AZ", "GA", "TX"]
        );
        assert_eq!(
            strs(&states_honoring_permit(&data, "CA").unwrap()),
            vec!["AZ", "TX"]
        );
    }

    #[test]
    fn honoring_excludes_self() {
        let data = sample();
        let honoring = states_honoring_permit(&data, "TX").unwrap();
        assert!(!honoring.iter().any(|c| c.as_str() == "TX"));
        assert_eq!(strs(&honoring), vec!["AZ", "FL", "GA"]);
    }

    #[test]
    fn summary_adds_home_only_for_non_permitless_states() {
        let data = sample();
        let fl = reciprocity_summary(&data, "FL").unwrap();
        assert_eq!(fl.honored_by_count, 3);
        assert_eq!(fl.can_carry_in, 4);
        assert_eq!(fl.honors_count, 2);

        let az = reciprocity_summary(&data, "AZ").unwrap();
        // Only TX: the other permitless state is AZ itself.
        assert_eq!(az.honored_by_count, 1);
        assert_eq!(az.can_carry_in, 1);
    }

    #[test]
    fn reach_counts_full_and_permitless_plus_home() {
        let data = sample();
        // CA: AZ and TX permitless, nobody honors CA.
        assert_eq!(carry_reach_count(&data, "CA").unwrap(), 3);
        // FL: AZ, TX permitless; GA honors FL.
        assert_eq!(carry_reach_count(&data, "FL").unwrap(), 4);
    }

    #[test]
    fn breakdown_groups_every_other_state() {
        let data = sample();
        let b = reciprocity_breakdown(&data, "GA").unwrap();
        assert_eq!(b.home.as_str(), "GA");
        assert_eq!(strs(&b.permitless), vec!["AZ", "TX"]);
        assert_eq!(strs(&b.full), vec!["FL"]);
        assert!(b.partial.is_empty());
        assert_eq!(strs(&b.none), vec!["CA", "NY"]);
        assert_eq!(b.can_carry_count, 4);
        assert_eq!(b.can_carry_count, carry_reach_count(&data, "GA").unwrap());
    }

    #[test]
    fn status_map_covers_every_state() {
        let data = sample();
        let map = status_map(&data, "NY").unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map["NY"], ReciprocityStatus::Home);
        assert_eq!(map["AZ"], ReciprocityStatus::Permitless);
        assert_eq!(map["FL"], ReciprocityStatus::None);
    }

    #[test]
    fn national_stats_counts_flags_and_permit_types() {
        let data = Fixture::new()
            .state("AZ", &[])
            .state("CA", &[])
            .state("VT", &[])
            .permitless(&["AZ", "VT"])
            .with("CA", |l| {
                l.permit_type = PermitType::MayIssue;
                l.red_flag_law = true;
            })
            .with("VT", |l| l.permit_type = PermitType::Unrestricted)
            .build();
        let stats = national_stats(&data);
        assert_eq!(
            stats,
            NationalStats {
                total: 3,
                permitless_carry: 2,
                unrestricted: 1,
                shall_issue: 1,
                may_issue: 1,
                no_issue: 0,
                red_flag: 1,
            }
        );
    }

    #[test]
    fn unknown_state_rejected_everywhere() {
        let data = sample();
        assert!(states_honoring_permit(&data, "PR").is_err());
        assert!(reciprocity_summary(&data, "PR").is_err());
        assert!(carry_reach_count(&data, "PR").is_err());
        assert!(reciprocity_breakdown(&data, "PR").is_err());
        assert!(status_map(&data, "PR").is_err());
    }
}
