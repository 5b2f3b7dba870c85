//! # Validate Subcommand
//!
//! Loads the configured dataset and lists every data-quality finding.
//! Structural errors (dangling references, duplicate records, parse
//! failures) abort with exit code 1. Findings are reported without failing
//! the load; `--strict`, or `validation.asymmetry: reject` in the
//! configuration, turns any finding into exit code 2.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use carrymap_pack::{AsymmetryPolicy, Finding, LoadOptions, ValidationReport};

use crate::config::Config;
use crate::load_dataset;
use crate::output::{emit, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Exit with status 2 when any finding is reported.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidationSummary<'r> {
    pub states: usize,
    pub edges: usize,
    pub asymmetric_edges: usize,
    pub findings: &'r [Finding],
}

pub fn run_validate(args: &ValidateArgs, config: &Config, format: OutputFormat) -> Result<u8> {
    // Loaded under `Warn` regardless of configuration; the policy only
    // affects the exit code.
    let data = load_dataset(config, &LoadOptions::default())?;
    let summary = ValidationSummary {
        states: data.laws.len(),
        edges: data.graph.edges().count(),
        asymmetric_edges: data.report.asymmetry_count(),
        findings: &data.report.findings,
    };
    emit(format, &summary, || render_report(&summary))?;

    let strict = args.strict || config.validation.asymmetry == AsymmetryPolicy::Reject;
    Ok(exit_code(&data.report, strict))
}

pub fn exit_code(report: &ValidationReport, strict: bool) -> u8 {
    if strict && !report.is_clean() {
        2
    } else {
        0
    }
}

pub fn render_report(summary: &ValidationSummary<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} jurisdictions, {} honors edges",
        summary.states, summary.edges
    );
    if summary.findings.is_empty() {
        let _ = writeln!(out, "OK: no findings");
        return out;
    }
    for finding in summary.findings {
        let _ = writeln!(out, "  - {finding}");
    }
    let _ = writeln!(
        out,
        "{} findings ({} asymmetric edges)",
        summary.findings.len(),
        summary.asymmetric_edges
    );
    out
}
