//! # Lookup Subcommands
//!
//! `carrymap states` lists every jurisdiction; `carrymap law <CODE>` prints
//! one full law record. A state may be given by code or by display name.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;

use carrymap_core::StateLaw;
use carrymap_reciprocity::ReciprocityEngine;

use crate::output::{emit, yes_no, OutputFormat};

/// Arguments for `carrymap states`.
#[derive(Args, Debug)]
pub struct StatesArgs {
    /// Only list jurisdictions with permitless carry.
    #[arg(long)]
    pub permitless: bool,
}

/// Arguments for `carrymap law`.
#[derive(Args, Debug)]
pub struct LawArgs {
    /// State code (e.g. `TX`) or name (e.g. "New Hampshire").
    pub state: String,
}

/// Accept either a code or a display name.
pub fn resolve_state<'e>(engine: &'e ReciprocityEngine, input: &str) -> Result<&'e StateLaw> {
    if let Some(code) = engine.code_for_name(input) {
        return engine.law(code.as_str()).map_err(Into::into);
    }
    engine
        .law(input)
        .with_context(|| format!("no jurisdiction matches '{input}'"))
}

pub fn run_states(args: &StatesArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let laws: Vec<&StateLaw> = engine
        .all_states()
        .iter()
        .filter(|law| !args.permitless || law.permitless_carry)
        .collect();
    emit(format, &laws, || render_states(&laws))?;
    Ok(0)
}

pub fn run_law(args: &LawArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let law = resolve_state(engine, &args.state)?;
    emit(format, law, || render_law(law))?;
    Ok(0)
}

pub fn render_states(laws: &[&StateLaw]) -> String {
    let mut out = String::new();
    for law in laws {
        let _ = writeln!(
            out,
            "  {}  {:<22} {:<13} {}",
            law.state_code,
            law.state_name,
            law.permit_type.badge(),
            if law.permitless_carry { "permitless carry" } else { "" }
        );
    }
    let _ = writeln!(out, "{} jurisdictions", laws.len());
    out
}

pub fn render_law(law: &StateLaw) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", law.state_name, law.state_code);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", law.summary);
    let _ = writeln!(out);

    let rows = [
        ("Permit Type", law.permit_type.label().to_string()),
        ("Permitless Carry", yes_no(law.permitless_carry).to_string()),
        ("Open Carry", law.open_carry.label().to_string()),
        ("Concealed Carry", law.concealed_carry.label().to_string()),
        ("Stand Your Ground", yes_no(law.stand_your_ground).to_string()),
        ("Castle Doctrine", yes_no(law.castle_doctrine).to_string()),
        ("Duty to Retreat", yes_no(law.duty_to_retreat).to_string()),
        ("Red Flag Law", yes_no(law.red_flag_law).to_string()),
        ("Universal Background Checks", yes_no(law.universal_background_checks).to_string()),
        ("Permit Required for Purchase", yes_no(law.permit_required_for_purchase).to_string()),
        ("State Preemption", yes_no(law.preemption).to_string()),
        ("Magazine Limit", law.magazine_restriction.to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<30} {value}");
    }

    if let Some(transport) = &law.transport_requirements {
        let _ = writeln!(out, "\nTransport: {transport}");
    }
    if let Some(ammo) = &law.ammo_restrictions {
        let _ = writeln!(out, "\nAmmunition: {ammo}");
    }
    if !law.key_provisions.is_empty() {
        let _ = writeln!(out, "\nKey provisions:");
        for provision in &law.key_provisions {
            let _ = writeln!(out, "  - {provision}");
        }
    }
    let _ = writeln!(out, "\nSource: {}", law.source_url);
    let _ = writeln!(out, "Last updated: {}", law.last_updated);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use carrymap_pack::LoadOptions;

    fn engine() -> ReciprocityEngine {
        ReciprocityEngine::embedded(&LoadOptions::default()).unwrap()
    }

    #[test]
    fn resolve_by_code_or_name() {
        let e = engine();
        assert_eq!(resolve_state(&e, "tx").unwrap().state_name, "Texas");
        assert_eq!(resolve_state(&e, "new hampshire").unwrap().state_code.as_str(), "NH");
        assert!(resolve_state(&e, "PR").is_err());
        assert!(resolve_state(&e, "Atlantis").is_err());
    }

    #[test]
    fn states_listing_counts() {
        let e = engine();
        let all: Vec<&StateLaw> = e.all_states().iter().collect();
        let text = render_states(&all);
        assert!(text.ends_with("51 jurisdictions\n"));
        assert!(text.contains("  TX  Texas"));
    }

    #[test]
    fn law_view_has_every_field() {
        let e = engine();
        let text = render_law(e.law("CA").unwrap());
        assert!(text.starts_with("California (CA)\n"));
        assert!(text.contains("Magazine Limit"));
        assert!(text.contains("10 rounds"));
        assert!(text.contains("Source: "));
    }
}
