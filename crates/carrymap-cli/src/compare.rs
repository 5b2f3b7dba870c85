//! `carrymap compare <A> <B>`: side-by-side law table, both reciprocity
//! directions, and travel warnings for someone from A visiting B.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use carrymap_reciprocity::{ReciprocityEngine, StateComparison};

use crate::lookup::resolve_state;
use crate::output::{emit, OutputFormat};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Traveler's home state.
    pub a: String,
    /// Destination state.
    pub b: String,

    /// Only show rows whose values differ.
    #[arg(long)]
    pub differences: bool,
}

pub fn run_compare(args: &CompareArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let a = resolve_state(engine, &args.a)?;
    let b = resolve_state(engine, &args.b)?;
    let mut cmp = engine.compare(a.state_code.as_str(), b.state_code.as_str())?;
    if args.differences {
        cmp.fields.retain(|f| f.is_different);
    }
    emit(format, &cmp, || render_comparison(&cmp))?;
    Ok(0)
}

pub fn render_comparison(cmp: &StateComparison<'_>) -> String {
    let (a, b) = (cmp.a, cmp.b);
    let mut out = String::new();
    let _ = writeln!(out, "{} vs {}", a.state_name, b.state_name);
    let _ = writeln!(
        out,
        "  {} permit in {}: {}",
        a.state_code,
        b.state_code,
        cmp.status_a_to_b.label()
    );
    let _ = writeln!(
        out,
        "  {} permit in {}: {}",
        b.state_code,
        a.state_code,
        cmp.status_b_to_a.label()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:<30} {:<18} {}", "", a.state_code, b.state_code);
    for field in &cmp.fields {
        let marker = if field.is_different { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:<30} {:<18} {}",
            field.label, field.value_a, field.value_b
        );
        if let Some(hint) = field.hint {
            let _ = writeln!(out, "    ! {hint}");
        }
    }
    let _ = writeln!(out, "\n{} of 12 fields differ.", cmp.difference_count);

    if !cmp.warnings.is_empty() {
        let _ = writeln!(out, "\nTravel warnings:");
        for warning in &cmp.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }
    out
}
