//! # Reciprocity Subcommands
//!
//! - `carrymap status <HOME> <TARGET>`: one status resolution.
//! - `carrymap summary <STATE>`: honor counts and the honoring list.
//! - `carrymap reach <STATE>`: every other state grouped by status.
//! - `carrymap map [--home CODE]`: per-state map fill and legend.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use carrymap_core::{ReciprocityStatus, StateCode};
use carrymap_reciprocity::{
    legend, LegendEntry, MapShade, ReciprocityBreakdown, ReciprocityEngine, ReciprocitySummary,
};

use crate::lookup::resolve_state;
use crate::output::{emit, join_codes, OutputFormat};

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Permit-issuing (home) state.
    pub home: String,
    /// State being visited.
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub home: StateCode,
    pub target: StateCode,
    pub status: ReciprocityStatus,
}

pub fn run_status(args: &StatusArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let home = resolve_state(engine, &args.home)?;
    let target = resolve_state(engine, &args.target)?;
    let status = engine.resolve_status(home.state_code.as_str(), target.state_code.as_str())?;
    tracing::info!(home = %home.state_code, target = %target.state_code, %status, "resolved");

    let report = StatusReport {
        home: home.state_code.clone(),
        target: target.state_code.clone(),
        status,
    };
    emit(format, &report, || {
        format!(
            "{} permit in {}: {} ({})\n",
            home.state_name,
            target.state_name,
            status.label(),
            status
        )
    })?;
    Ok(0)
}

// ---------------------------------------------------------------------------
// summary
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct SummaryArgs {
    pub state: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub state: StateCode,
    #[serde(flatten)]
    pub summary: ReciprocitySummary,
    pub honored_by: Vec<StateCode>,
}

pub fn run_summary(args: &SummaryArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let law = resolve_state(engine, &args.state)?;
    let code = law.state_code.as_str();
    let report = SummaryReport {
        state: law.state_code.clone(),
        summary: engine.reciprocity_summary(code)?,
        honored_by: engine.states_honoring_permit(code)?,
    };
    emit(format, &report, || render_summary(&law.state_name, &report))?;
    Ok(0)
}

pub fn render_summary(name: &str, report: &SummaryReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{name} ({})", report.state);
    let _ = writeln!(out, "  Honors permits from:  {} states", report.summary.honors_count);
    let _ = writeln!(out, "  Permit honored by:    {} states", report.summary.honored_by_count);
    let _ = writeln!(out, "  Can carry in:         {} states", report.summary.can_carry_in);
    let _ = writeln!(out, "  Honored by: {}", join_codes(&report.honored_by));
    out
}

// ---------------------------------------------------------------------------
// reach
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct ReachArgs {
    /// Home state.
    pub state: String,
}

pub fn run_reach(args: &ReachArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let law = resolve_state(engine, &args.state)?;
    let breakdown = engine.reciprocity_breakdown(law.state_code.as_str())?;
    emit(format, &breakdown, || render_breakdown(&law.state_name, &breakdown))?;
    Ok(0)
}

pub fn render_breakdown(name: &str, b: &ReciprocityBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Carrying with a {name} permit:");
    let groups = [
        (ReciprocityStatus::Permitless, &b.permitless),
        (ReciprocityStatus::Full, &b.full),
        (ReciprocityStatus::Partial, &b.partial),
        (ReciprocityStatus::None, &b.none),
    ];
    for (status, codes) in groups {
        let _ = writeln!(out, "  {} ({}): {}", status.label(), codes.len(), join_codes(codes));
    }
    let _ = writeln!(out, "Can carry in {} states, home included.", b.can_carry_count);
    out
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Shade by reciprocity relative to this home state instead of by law.
    #[arg(long)]
    pub home: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MapRow {
    pub state_code: StateCode,
    pub state_name: String,
    pub shade: MapShade,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MapView {
    pub home: Option<StateCode>,
    pub states: Vec<MapRow>,
    pub legend: Vec<LegendEntry>,
}

pub fn build_map(engine: &ReciprocityEngine, home: Option<&str>) -> Result<MapView> {
    let home = home.map(|h| resolve_state(engine, h)).transpose()?;
    let home_code = home.map(|law| law.state_code.as_str());

    let states = engine
        .all_states()
        .iter()
        .map(|law| {
            let shade = engine.shade(home_code, law.state_code.as_str())?;
            Ok(MapRow {
                state_code: law.state_code.clone(),
                state_name: law.state_name.clone(),
                shade,
                color: shade.color(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MapView {
        home: home.map(|law| law.state_code.clone()),
        states,
        legend: legend(home.is_some()),
    })
}

pub fn run_map(args: &MapArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let view = build_map(engine, args.home.as_deref())?;
    emit(format, &view, || render_map(&view))?;
    Ok(0)
}

pub fn render_map(view: &MapView) -> String {
    let mut out = String::new();
    for row in &view.states {
        let _ = writeln!(
            out,
            "  {}  {:<22} {}  {}",
            row.state_code,
            row.state_name,
            row.color,
            row.shade.label()
        );
    }
    let _ = writeln!(out, "\nLegend:");
    for entry in &view.legend {
        let _ = writeln!(out, "  {}  {}", entry.color, entry.label);
    }
    out
}
