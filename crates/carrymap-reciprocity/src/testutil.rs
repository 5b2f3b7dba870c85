//! Small hand-built datasets for unit tests.

use carrymap_core::{CarryRule, MagazineLimit, PermitType, StateCode, StateLaw};
use carrymap_pack::{
    Dataset, LawTable, LoadOptions, PermitlessSet, ReciprocityEntry, ReciprocityGraph,
    ValidationReport,
};
use chrono::NaiveDate;

pub fn code(s: &str) -> StateCode {
    StateCode::new(s).unwrap()
}

fn name_for(code: &str) -> String {
    match code {
        "AZ" => "Arizona",
        "CA" => "California",
        "FL" => "Florida",
        "GA" => "Georgia",
        "NJ" => "New Jersey",
        "NY" => "New York",
        "TX" => "Texas",
        "VT" => "Vermont",
        other => other,
    }
    .to_string()
}

/// Shall-issue, permit-required, castle doctrine only, preemption, no
/// magazine limit.
pub fn law(code_str: &str) -> StateLaw {
    StateLaw {
        state_code: code(code_str),
        state_name: name_for(code_str),
        permit_type: PermitType::ShallIssue,
        open_carry: CarryRule::PermitRequired,
        concealed_carry: CarryRule::PermitRequired,
        permitless_carry: false,
        permit_required_for_purchase: false,
        universal_background_checks: false,
        red_flag_law: false,
        stand_your_ground: true,
        castle_doctrine: true,
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

/// Builder for small datasets.
#[derive(Default)]
pub struct Fixture {
    laws: Vec<StateLaw>,
    entries: Vec<ReciprocityEntry>,
    permitless: Vec<StateCode>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state with a law record and a reciprocity entry.
    pub fn state(mut self, state: &str, honors: &[&str]) -> Self {
        self.laws.push(law(state));
        self.entries.push(ReciprocityEntry {
            state_code: code(state),
            honors: honors.iter().map(|c| code(c)).collect(),
            honored_by: Vec::new(),
        });
        self
    }

    /// Add a law record with no reciprocity entry.
    pub fn law_only(mut self, state: &str) -> Self {
        self.laws.push(law(state));
        self
    }

    /// Mark states permitless, keeping their law flags consistent.
    pub fn permitless(mut self, states: &[&str]) -> Self {
        for s in states {
            self.permitless.push(code(s));
            self.edit(s, |l| {
                l.permitless_carry = true;
                l.open_carry = CarryRule::Permitless;
                l.concealed_carry = CarryRule::Permitless;
            });
        }
        self
    }

    /// Modify an already-added law record.
    pub fn with(mut self, state: &str, f: impl FnOnce(&mut StateLaw)) -> Self {
        self.edit(state, f);
        self
    }

    fn edit(&mut self, state: &str, f: impl FnOnce(&mut StateLaw)) {
        let law = self
            .laws
            .iter_mut()
            .find(|l| l.state_code.as_str() == state)
            .unwrap();
        f(law);
    }

    /// Assemble through the normal validating path.
    pub fn build(self) -> Dataset {
        Dataset::assemble(
            self.laws,
            self.entries,
            self.permitless,
            &LoadOptions::default(),
        )
        .unwrap()
    }

    /// Assemble without referential checks.
    pub fn build_unvalidated(self) -> Dataset {
        Dataset {
            laws: LawTable::from_records(self.laws).unwrap(),
            graph: ReciprocityGraph::from_entries(&self.entries).unwrap(),
            permitless: PermitlessSet::from_codes(self.permitless).unwrap(),
            report: ValidationReport::default(),
        }
    }
}
