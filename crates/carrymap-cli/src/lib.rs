//! # carrymap-cli: Command-Line Interface
//!
//! Provides the `carrymap` binary over the reciprocity engine.
//!
//! ## Subcommands
//!
//! - `carrymap states`: list jurisdictions.
//! - `carrymap law <CODE>`: one jurisdiction's law record.
//! - `carrymap status <HOME> <TARGET>`: reciprocity status for a visit.
//! - `carrymap summary <STATE>`: honor counts for a state's permit.
//! - `carrymap reach <STATE>`: every state grouped by status for a home.
//! - `carrymap compare <A> <B>`: side-by-side laws and travel warnings.
//! - `carrymap map [--home CODE]`: map fills and legend.
//! - `carrymap stats`: national counts.
//! - `carrymap validate [--strict]`: data-quality findings.
//!
//! Every subcommand accepts the global `--json` flag.

pub mod compare;
pub mod config;
pub mod lookup;
pub mod output;
pub mod reciprocity;
pub mod stats;
pub mod validate;

use anyhow::{Context, Result};

use carrymap_pack::{Dataset, LoadOptions};
use carrymap_reciprocity::ReciprocityEngine;

use crate::config::Config;

/// Load the dataset named by the configuration, or the embedded one.
pub fn load_dataset(config: &Config, options: &LoadOptions) -> Result<Dataset> {
    match &config.data {
        Some(paths) => {
            tracing::info!(laws = %paths.laws.display(), "loading dataset from files");
            Dataset::from_files(paths, options).context("failed to load dataset")
        }
        None => Dataset::embedded(options).context("failed to load embedded dataset"),
    }
}

/// Build an engine honoring the configured asymmetry policy.
pub fn build_engine(config: &Config) -> Result<ReciprocityEngine> {
    let data = load_dataset(config, &config.load_options())?;
    Ok(ReciprocityEngine::new(data))
}
