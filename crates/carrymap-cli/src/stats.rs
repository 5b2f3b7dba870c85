//! `carrymap stats`: national jurisdiction counts.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use carrymap_reciprocity::{NationalStats, ReciprocityEngine};

use crate::output::{emit, OutputFormat};

#[derive(Args, Debug)]
pub struct StatsArgs {}

pub fn run_stats(_args: &StatsArgs, engine: &ReciprocityEngine, format: OutputFormat) -> Result<u8> {
    let stats = engine.national_stats();
    emit(format, &stats, || render_stats(&stats))?;
    Ok(0)
}

pub fn render_stats(stats: &NationalStats) -> String {
    let mut out = String::new();
    let rows = [
        ("Jurisdictions", stats.total),
        ("Permitless carry", stats.permitless_carry),
        ("Unrestricted", stats.unrestricted),
        ("Shall-issue", stats.shall_issue),
        ("May-issue", stats.may_issue),
        ("No-issue", stats.no_issue),
        ("Red flag laws", stats.red_flag),
    ];
    for (label, count) in rows {
        let _ = writeln!(out, "  {label:<18} {count:>3}");
    }
    out
}
