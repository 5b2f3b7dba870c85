//! Property tests over every pair of jurisdictions in the shipped dataset.

use std::sync::OnceLock;

use carrymap_core::{CarryRule, ReciprocityStatus, StateCode};
use carrymap_pack::LoadOptions;
use carrymap_reciprocity::ReciprocityEngine;
use proptest::prelude::*;

fn engine() -> &'static ReciprocityEngine {
    static ENGINE: OnceLock<ReciprocityEngine> = OnceLock::new();
    ENGINE.get_or_init(|| ReciprocityEngine::embedded(&LoadOptions::default()).unwrap())
}

fn codes() -> Vec<StateCode> {
    engine()
        .all_states()
        .iter()
        .map(|l| l.state_code.clone())
        .collect()
}

fn any_code() -> impl Strategy<Value = StateCode> {
    proptest::sample::select(codes())
}

proptest! {
    #[test]
    fn same_state_resolves_home(x in any_code()) {
        prop_assert_eq!(
            engine().resolve_status(x.as_str(), x.as_str()).unwrap(),
            ReciprocityStatus::Home
        );
    }

    #[test]
    fn permitless_target_always_wins(home in any_code(), target in any_code()) {
        prop_assume!(home != target);
        prop_assume!(engine().dataset().permitless.contains(target.as_str()));
        prop_assert_eq!(
            engine().resolve_status(home.as_str(), target.as_str()).unwrap(),
            ReciprocityStatus::Permitless
        );
    }

    #[test]
    fn resolver_never_produces_partial(home in any_code(), target in any_code()) {
        prop_assert_ne!(
            engine().resolve_status(home.as_str(), target.as_str()).unwrap(),
            ReciprocityStatus::Partial
        );
    }

    #[test]
    fn honoring_list_excludes_self_and_is_sorted(x in any_code()) {
        let honoring = engine().states_honoring_permit(x.as_str()).unwrap();
        prop_assert!(!honoring.contains(&x));
        prop_assert!(honoring.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_count_matches_list(x in any_code()) {
        let summary = engine().reciprocity_summary(x.as_str()).unwrap();
        let honoring = engine().states_honoring_permit(x.as_str()).unwrap();
        prop_assert_eq!(summary.honored_by_count, honoring.len());
    }

    #[test]
    fn breakdown_agrees_with_reach(x in any_code()) {
        let breakdown = engine().reciprocity_breakdown(x.as_str()).unwrap();
        prop_assert_eq!(
            breakdown.can_carry_count,
            engine().carry_reach_count(x.as_str()).unwrap()
        );
        let grouped = breakdown.permitless.len()
            + breakdown.full.len()
            + breakdown.partial.len()
            + breakdown.none.len();
        prop_assert_eq!(grouped, engine().all_states().len() - 1);
    }

    #[test]
    fn difference_flags_symmetric(a in any_code(), b in any_code()) {
        let ab = engine().compare_laws(a.as_str(), b.as_str()).unwrap();
        let ba = engine().compare_laws(b.as_str(), a.as_str()).unwrap();
        for (x, y) in ab.iter().zip(&ba) {
            prop_assert_eq!(x.is_different, y.is_different);
        }
    }

    #[test]
    fn every_triggered_warning_is_present(a in any_code(), b in any_code()) {
        let warnings = engine().travel_warnings(a.as_str(), b.as_str()).unwrap();
        let law_a = engine().law(a.as_str()).unwrap();
        let law_b = engine().law(b.as_str()).unwrap();
        if engine().resolve_status(a.as_str(), b.as_str()).unwrap() == ReciprocityStatus::None {
            let expected = format!("{} does NOT honor {} permits.", law_b.state_name, law_a.state_name);
            prop_assert!(warnings.iter().any(|w| w.starts_with(&expected)));
        }
        if engine().resolve_status(b.as_str(), a.as_str()).unwrap() == ReciprocityStatus::None {
            let expected = format!("{} does NOT honor {} permits.", law_a.state_name, law_b.state_name);
            prop_assert!(warnings.iter().any(|w| w.starts_with(&expected)));
        }
        if law_a.permitless_carry != law_b.permitless_carry {
            prop_assert!(warnings.iter().any(|w| w.contains("allows permitless carry")));
        }
        let (mag_a, mag_b) = (law_a.magazine_restriction, law_b.magazine_restriction);
        if mag_a != mag_b {
            let rounds = mag_a.stricter(mag_b).as_rounds().unwrap();
            let expected = format!("limits magazines to {rounds} rounds.");
            prop_assert!(warnings.iter().any(|w| w.contains(&expected)));
        } else {
            prop_assert!(!warnings.iter().any(|w| w.contains("limits magazines")));
        }
        if law_a.duty_to_retreat != law_b.duty_to_retreat {
            prop_assert!(warnings.iter().any(|w| w.contains("has a duty to retreat")));
        }
        let prohibited = [law_a, law_b]
            .iter()
            .filter(|l| l.open_carry == CarryRule::Prohibited)
            .count();
        if law_a.open_carry != law_b.open_carry && prohibited == 1 {
            prop_assert!(warnings.iter().any(|w| w.starts_with("Open carry is prohibited in")));
        }
        if law_a.preemption != law_b.preemption {
            prop_assert!(warnings.iter().any(|w| w.contains("does not have state preemption")));
        }
    }

    #[test]
    fn status_map_matches_pointwise_resolution(home in any_code(), target in any_code()) {
        let map = engine().status_map(home.as_str()).unwrap();
        prop_assert_eq!(
            map[&target],
            engine().resolve_status(home.as_str(), target.as_str()).unwrap()
        );
    }
}
