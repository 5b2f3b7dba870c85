//! # carrymap CLI entry point
//!
//! Parses command-line arguments, loads configuration and the dataset, and
//! dispatches to subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carrymap_cli::build_engine;
use carrymap_cli::compare::{run_compare, CompareArgs};
use carrymap_cli::config::{self, Config};
use carrymap_cli::lookup::{run_law, run_states, LawArgs, StatesArgs};
use carrymap_cli::output::OutputFormat;
use carrymap_cli::reciprocity::{
    run_map, run_reach, run_status, run_summary, MapArgs, ReachArgs, StatusArgs, SummaryArgs,
};
use carrymap_cli::stats::{run_stats, StatsArgs};
use carrymap_cli::validate::{run_validate, ValidateArgs};

/// U.S. concealed-carry reciprocity lookup.
///
/// Answers whether a permit from one state is honored in another, where a
/// resident may carry, and how two states' carry laws differ.
#[derive(Parser, Debug)]
#[command(name = "carrymap", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./carrymap.yaml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every jurisdiction.
    States(StatesArgs),

    /// Show one jurisdiction's carry laws.
    Law(LawArgs),

    /// Resolve the reciprocity status of a home-state permit in a target state.
    Status(StatusArgs),

    /// Honor counts and honoring states for one state's permit.
    Summary(SummaryArgs),

    /// Group every state by status for a home state.
    Reach(ReachArgs),

    /// Compare two states' laws and list travel warnings.
    Compare(CompareArgs),

    /// Map shading by law, or by reciprocity for a home state.
    Map(MapArgs),

    /// National jurisdiction counts.
    Stats(StatsArgs),

    /// Load the dataset and report data-quality findings.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "carrymap starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, source) = config::load(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &source {
        tracing::info!(path = %path.display(), "configuration loaded");
    }
    let format = output_format(cli.json, &config);

    dispatch(cli.command, &config, format, source.as_deref())
}

fn output_format(json_flag: bool, config: &Config) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output.format
    }
}

fn dispatch(
    command: Commands,
    config: &Config,
    format: OutputFormat,
    source: Option<&Path>,
) -> Result<u8> {
    let engine = || {
        build_engine(config).with_context(|| match source {
            Some(path) => format!("dataset configured in {}", path.display()),
            None => "embedded dataset".to_string(),
        })
    };

    match command {
        Commands::Validate(args) => run_validate(&args, config, format),
        Commands::States(args) => run_states(&args, &engine()?, format),
        Commands::Law(args) => run_law(&args, &engine()?, format),
        Commands::Status(args) => run_status(&args, &engine()?, format),
        Commands::Summary(args) => run_summary(&args, &engine()?, format),
        Commands::Reach(args) => run_reach(&args, &engine()?, format),
        Commands::Compare(args) => run_compare(&args, &engine()?, format),
        Commands::Map(args) => run_map(&args, &engine()?, format),
        Commands::Stats(args) => run_stats(&args, &engine()?, format),
    }
}
