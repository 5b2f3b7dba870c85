//! Fixture builders shared by this crate's unit tests.

use carrymap_core::{CarryRule, MagazineLimit, PermitType, StateCode, StateLaw};
use chrono::NaiveDate;

use crate::graph::ReciprocityEntry;

pub fn code(s: &str) -> StateCode {
    StateCode::new(s).unwrap()
}

/// A permit-required, shall-issue record with every flag off.
pub fn law(code_str: &str, name: &str) -> StateLaw {
    StateLaw {
        state_code: code(code_str),
        state_name: name.to_string(),
        permit_type: PermitType::ShallIssue,
        open_carry: CarryRule::PermitRequired,
        concealed_carry: CarryRule::PermitRequired,
        permitless_carry: false,
        permit_required_for_purchase: false,
        universal_background_checks: false,
        red_flag_law: false,
        stand_your_ground: false,
        castle_doctrine: false,
        duty_to_retreat: false,
        preemption: true,
        magazine_restriction: MagazineLimit::NoLimit,
        transport_requirements: None,
        ammo_restrictions: None,
        source_url: String::new(),
        summary: String::new(),
        key_provisions: Vec::new(),
        last_updated: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    }
}

pub fn entry(state: &str, honors: &[&str], honored_by: &[&str]) -> ReciprocityEntry {
    ReciprocityEntry {
        state_code: code(state),
        honors: honors.iter().map(|c| code(c)).collect(),
        honored_by: honored_by.iter().map(|c| code(c)).collect(),
    }
}
