//! # Pairwise Law Comparison
//!
//! Side-by-side rendering of two states' law records and the travel
//! warnings for crossing between them.
//!
//! ## Field list
//!
//! Twelve fields in fixed order. A field is *different* when the two
//! rendered strings differ. Differing fields may carry a caution hint.
//!
//! ## Travel warnings
//!
//! Seven checks run in order, each contributing at most one warning. The
//! checks are independent: a pair may trigger any combination of them.

use carrymap_core::{CarryRule, ReciprocityStatus, StateLaw};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonField {
    pub label: &'static str,
    pub value_a: String,
    pub value_b: String,
    pub is_different: bool,
    /// Caution text, present only when the values differ and the field has
    /// one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// Labels of the compared fields, in order.
pub const FIELD_LABELS: [&str; 12] = [
    "Permit Type",
    "Concealed Carry",
    "Open Carry",
    "Permitless Carry",
    "Stand Your Ground",
    "Castle Doctrine",
    "Duty to Retreat",
    "Magazine Limit",
    "Red Flag Law",
    "Background Checks",
    "Permit to Purchase",
    "Preemption",
];

fn yes_no(value: bool) -> String {
    let text = if value { "Yes" } else { "No" };
    text.to_string()
}

fn required(value: bool) -> String {
    let text = if value { "Required" } else { "Not required" };
    text.to_string()
}

fn field(
    label: &'static str,
    value_a: String,
    value_b: String,
    hint: Option<&'static str>,
) -> ComparisonField {
    let is_different = value_a != value_b;
    ComparisonField {
        label,
        value_a,
        value_b,
        is_different,
        hint: if is_different { hint } else { None },
    }
}

/// Compare two law records field by field.
pub fn compare_laws(a: &StateLaw, b: &StateLaw) -> Vec<ComparisonField> {
    let pair = |f: fn(&StateLaw) -> String| (f(a), f(b));

    let rows: [(&'static str, (String, String), Option<&'static str>); 12] = [
        (
            "Permit Type",
            pair(|l| l.permit_type.label().to_string()),
            Some("Different permit systems — check if your permit transfers."),
        ),
        (
            "Concealed Carry",
            pair(|l| l.concealed_carry.label().to_string()),
            Some("Concealed carry rules differ — verify you can legally carry."),
        ),
        (
            "Open Carry",
            pair(|l| l.open_carry.label().to_string()),
            Some("Open carry laws change across the border — could be illegal."),
        ),
        (
            "Permitless Carry",
            pair(|l| yes_no(l.permitless_carry)),
            Some("One state requires a permit — do not assume permitless carry."),
        ),
        (
            "Stand Your Ground",
            pair(|l| yes_no(l.stand_your_ground)),
            Some("Self-defense rights differ — duty to retreat may apply."),
        ),
        (
            "Castle Doctrine",
            pair(|l| yes_no(l.castle_doctrine)),
            None,
        ),
        (
            "Duty to Retreat",
            pair(|l| yes_no(l.duty_to_retreat)),
            Some("Duty to retreat applies in one state — know your obligation."),
        ),
        (
            "Magazine Limit",
            pair(|l| l.magazine_restriction.to_string()),
            Some("Magazine capacity limits differ — you may need to swap magazines at the border."),
        ),
        ("Red Flag Law", pair(|l| yes_no(l.red_flag_law)), None),
        (
            "Background Checks",
            pair(|l| required(l.universal_background_checks)),
            None,
        ),
        (
            "Permit to Purchase",
            pair(|l| required(l.permit_required_for_purchase)),
            None,
        ),
        (
            "Preemption",
            pair(|l| yes_no(l.preemption)),
            Some("Local ordinances may apply in one state — check city/county laws."),
        ),
    ];

    rows.into_iter()
        .map(|(label, (va, vb), hint)| field(label, va, vb, hint))
        .collect()
}

// ---------------------------------------------------------------------------
// Travel warnings
// ---------------------------------------------------------------------------

/// Build travel warnings for the ordered pair `(a, b)`.
///
/// `a_to_b` is the status of `b` for an `a` permit holder; `b_to_a` the
/// reverse. Statuses are taken as inputs so this stays a pure function of
/// its arguments.
pub fn travel_warnings(
    a: &StateLaw,
    b: &StateLaw,
    a_to_b: ReciprocityStatus,
    b_to_a: ReciprocityStatus,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if a_to_b == ReciprocityStatus::None {
        warnings.push(not_honored(a, b));
    }
    if b_to_a == ReciprocityStatus::None {
        warnings.push(not_honored(b, a));
    }

    match (a.permitless_carry, b.permitless_carry) {
        (true, false) => warnings.push(permit_needed(a, b)),
        (false, true) => warnings.push(permit_needed(b, a)),
        _ => {}
    }

    let (mag_a, mag_b) = (a.magazine_restriction, b.magazine_restriction);
    if mag_a != mag_b && (mag_a.is_restricted() || mag_b.is_restricted()) {
        let strictest = mag_a.stricter(mag_b);
        if let Some(rounds) = strictest.as_rounds() {
            let state = if mag_a == strictest { a } else { b };
            warnings.push(format!(
                "{} limits magazines to {rounds} rounds. Ensure compliance before crossing the border.",
                state.state_name
            ));
        }
    }

    if a.duty_to_retreat != b.duty_to_retreat {
        let state = if a.duty_to_retreat { a } else { b };
        warnings.push(format!(
            "{} has a duty to retreat. Stand Your Ground does not apply — you must attempt to retreat before using force.",
            state.state_name
        ));
    }

    if a.open_carry != b.open_carry {
        let prohibited = [a, b]
            .into_iter()
            .find(|l| l.open_carry == CarryRule::Prohibited);
        if let Some(state) = prohibited {
            warnings.push(format!(
                "Open carry is prohibited in {}. Keep your firearm concealed.",
                state.state_name
            ));
        }
    }

    if a.preemption != b.preemption {
        let state = if a.preemption { b } else { a };
        warnings.push(format!(
            "{} does not have state preemption — local cities and counties may have stricter gun laws. Research your specific destination.",
            state.state_name
        ));
    }

    warnings
}

fn not_honored(holder: &StateLaw, host: &StateLaw) -> String {
    format!(
        "{} does NOT honor {} permits. You cannot legally carry with a {} permit in {}.",
        host.state_name, holder.state_name, holder.state_code, host.state_code
    )
}

fn permit_needed(permitless: &StateLaw, strict: &StateLaw) -> String {
    format!(
        "{} allows permitless carry but {} does not. You MUST have a valid permit to carry in {}.",
        permitless.state_name, strict.state_name, strict.state_code
    )
}

// ---------------------------------------------------------------------------
// Full comparison
// ---------------------------------------------------------------------------

/// Everything a side-by-side view needs for one ordered pair.
#[derive(Debug, Clone, Serialize)]
pub struct StateComparison<'d> {
    pub a: &'d StateLaw,
    pub b: &'d StateLaw,
    pub status_a_to_b: ReciprocityStatus,
    pub status_b_to_a: ReciprocityStatus,
    pub fields: Vec<ComparisonField>,
    pub warnings: Vec<String>,
    pub difference_count: usize,
}

impl<'d> StateComparison<'d> {
    pub fn new(
        a: &'d StateLaw,
        b: &'d StateLaw,
        status_a_to_b: ReciprocityStatus,
        status_b_to_a: ReciprocityStatus,
    ) -> Self {
        let fields = compare_laws(a, b);
        let warnings = travel_warnings(a, b, status_a_to_b, status_b_to_a);
        let difference_count = fields.iter().filter(|f| f.is_different).count();
        Self {
            a,
            b,
            status_a_to_b,
            status_b_to_a,
            fields,
            warnings,
            difference_count,
        }
    }
}
