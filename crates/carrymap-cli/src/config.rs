//! # Configuration
//!
//! `carrymap.yaml` selects the dataset, the asymmetry policy and the default
//! output format. Every key is optional:
//!
//! ```yaml
//! data:                 # omit to use the embedded dataset
//!   laws: data/laws.json
//!   reciprocity: data/reciprocity.json
//!   permitless: data/permitless.json
//! validation:
//!   asymmetry: warn     # warn | reject
//! output:
//!   format: text        # text | json
//! ```
//!
//! Relative data paths are resolved against the directory holding the
//! configuration file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use carrymap_pack::{AsymmetryPolicy, DatasetPaths, LoadOptions};

use crate::output::OutputFormat;

/// File name looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "carrymap.yaml";

/// Parsed `carrymap.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data: Option<DatasetPaths>,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub asymmetry: AsymmetryPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Parse YAML. Data paths are left as written.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("invalid carrymap configuration")
    }

    /// Read a configuration file and resolve its data paths against the
    /// file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config = Self::from_yaml_str(&content)
            .with_context(|| format!("in {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.data = config.data.map(|paths| paths.relative_to(base));
        Ok(config)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            asymmetry: self.validation.asymmetry,
        }
    }
}

/// Locate and load the configuration.
///
/// An explicit path must exist. Without one, `carrymap.yaml` in `cwd` is
/// used when present; otherwise defaults apply. Returns the file actually
/// read, if any.
pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => {
            if !p.is_file() {
                bail!("configuration file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no configuration file; using defaults");
                return Ok((Config::default(), None));
            }
            candidate
        }
    };
    tracing::debug!(path = %path.display(), "loading configuration");
    let config = Config::from_file(&path)?;
    Ok((config, Some(path)))
}
