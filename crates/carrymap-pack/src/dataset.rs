//! # Dataset Assembly
//!
//! A [`Dataset`] is the three reference tables plus the validation report
//! produced while assembling them. It is built once and read-only
//! afterwards.
//!
//! ```text
//! laws.json ─────────┐
//! reciprocity.json ──┼─► parse ─► referential checks ─► findings ─► policy ─► Dataset
//! permitless.json ───┘                 (fatal)          (warn)     (warn|reject)
//! ```
//!
//! The 51-jurisdiction dataset ships inside the binary; see
//! [`Dataset::embedded`]. Alternate data files can be loaded with
//! [`Dataset::from_files`].

use std::path::{Path, PathBuf};

use carrymap_core::{StateCode, StateLaw};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};
use crate::graph::{ReciprocityEntry, ReciprocityGraph};
use crate::laws::LawTable;
use crate::permitless::PermitlessSet;
use crate::validation::{self, AsymmetryPolicy, ValidationReport};

const EMBEDDED_LAWS: &str = include_str!("../data/laws.json");
const EMBEDDED_RECIPROCITY: &str = include_str!("../data/reciprocity.json");
const EMBEDDED_PERMITLESS: &str = include_str!("../data/permitless.json");

/// Options controlling dataset assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub asymmetry: AsymmetryPolicy,
}

/// Locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub laws: PathBuf,
    pub reciprocity: PathBuf,
    pub permitless: PathBuf,
}

impl DatasetPaths {
    /// Resolve relative paths against `base`. Absolute paths are kept.
    pub fn relative_to(&self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Self {
            laws: join(&self.laws),
            reciprocity: join(&self.reciprocity),
            permitless: join(&self.permitless),
        }
    }
}

/// The assembled, validated reference data.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub laws: LawTable,
    pub graph: ReciprocityGraph,
    pub permitless: PermitlessSet,
    pub report: ValidationReport,
}

impl Dataset {
    /// Assemble the dataset compiled into this crate.
    pub fn embedded(options: &LoadOptions) -> PackResult<Self> {
        Self::from_json_strs(
            EMBEDDED_LAWS,
            EMBEDDED_RECIPROCITY,
            EMBEDDED_PERMITLESS,
            options,
        )
    }

    /// Assemble from in-memory JSON documents.
    pub fn from_json_strs(
        laws: &str,
        reciprocity: &str,
        permitless: &str,
        options: &LoadOptions,
    ) -> PackResult<Self> {
        Self::assemble(
            parse(Path::new("laws.json"), laws)?,
            parse(Path::new("reciprocity.json"), reciprocity)?,
            parse(Path::new("permitless.json"), permitless)?,
            options,
        )
    }

    /// Assemble from data files on disk.
    ///
    /// # Errors
    ///
    /// [`PackError::FileNotFound`] if any file is missing, plus every error
    /// [`Dataset::assemble`] can return.
    pub fn from_files(paths: &DatasetPaths, options: &LoadOptions) -> PackResult<Self> {
        tracing::debug!(
            laws = %paths.laws.display(),
            reciprocity = %paths.reciprocity.display(),
            permitless = %paths.permitless.display(),
            "loading dataset from files"
        );
        Self::assemble(
            read_json(&paths.laws)?,
            read_json(&paths.reciprocity)?,
            read_json(&paths.permitless)?,
            options,
        )
    }

    /// Build the tables, run referential checks, collect findings, and
    /// apply the asymmetry policy.
    ///
    /// # Errors
    ///
    /// Any duplicate or dangling reference, a law record with no graph
    /// entry, or asymmetries under [`AsymmetryPolicy::Reject`].
    pub fn assemble(
        laws: Vec<StateLaw>,
        entries: Vec<ReciprocityEntry>,
        permitless: Vec<StateCode>,
        options: &LoadOptions,
    ) -> PackResult<Self> {
        let laws = LawTable::from_records(laws)?;
        let permitless = PermitlessSet::from_codes(permitless)?;
        validation::check_references(&laws, &entries, &permitless)?;
        let graph = ReciprocityGraph::from_entries(&entries)?;

        let report = validation::collect_findings(&laws, &entries, &graph, &permitless);
        report.log();
        options.asymmetry.enforce(&report)?;

        tracing::info!(
            states = laws.len(),
            permitless = permitless.len(),
            findings = report.findings.len(),
            asymmetries = report.asymmetry_count(),
            "dataset loaded"
        );

        Ok(Self {
            laws,
            graph,
            permitless,
            report,
        })
    }
}

fn parse<T: DeserializeOwned>(path: &Path, text: &str) -> PackResult<T> {
    serde_json::from_str(text).map_err(|source| PackError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> PackResult<T> {
    if !path.exists() {
        return Err(PackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    parse(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAWS: &str = r#"[
        {"stateCode":"TX","stateName":"Texas","permitType":"shall-issue",
         "openCarry":"permitless","concealedCarry":"permitless","permitlessCarry":true,
         "permitRequiredForPurchase":false,"universalBackgroundChecks":false,"redFlagLaw":false,
         "standYourGround":true,"castleDoctrine":true,"dutyToRetreat":false,"preemption":true,
         "magazineRestriction":null,"sourceUrl":"https://texas.gov","summary":"Texas.",
         "lastUpdated":"2026-02-01"},
        {"stateCode":"NY","stateName":"New York","permitType":"may-issue",
         "openCarry":"prohibited","concealedCarry":"permit-required","permitlessCarry":false,
         "permitRequiredForPurchase":true,"universalBackgroundChecks":true,"redFlagLaw":true,
         "standYourGround":false,"castleDoctrine":true,"dutyToRetreat":true,"preemption":false,
         "magazineRestriction":10,"sourceUrl":"https://ny.gov","summary":"New York.",
         "lastUpdated":"2026-02-01"}
    ]"#;

    const RECIPROCITY: &str = r#"[
        {"stateCode":"TX","honors":[],"honoredBy":[]},
        {"stateCode":"NY","honors":[],"honoredBy":[]}
    ]"#;

    #[test]
    fn assembles_from_strings() {
        let ds =
            Dataset::from_json_strs(LAWS, RECIPROCITY, r#"["TX"]"#, &LoadOptions::default())
                .unwrap();
        assert_eq!(ds.laws.len(), 2);
        assert!(ds.permitless.contains("TX"));
        assert!(ds.report.is_clean());
    }

    #[test]
    fn parse_error_names_the_document() {
        let err = Dataset::from_json_strs(LAWS, "{not json", "[]", &LoadOptions::default())
            .unwrap_err();
        match err {
            PackError::JsonParse { path, .. } => assert_eq!(path, Path::new("reciprocity.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("laws.json"), LAWS).unwrap();
        std::fs::write(dir.path().join("reciprocity.json"), "[{").unwrap();
        std::fs::write(dir.path().join("permitless.json"), "[]").unwrap();
        let paths = DatasetPaths {
            laws: "laws.json".into(),
            reciprocity: "reciprocity.json".into(),
            permitless: "permitless.json".into(),
        }
        .relative_to(dir.path());
        let err = Dataset::from_files(&paths, &LoadOptions::default()).unwrap_err();
        match err {
            PackError::JsonParse { path, .. } => {
                assert_eq!(path, dir.path().join("reciprocity.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn permitless_duplicate_is_fatal() {
        let err = Dataset::from_json_strs(LAWS, RECIPROCITY, r#"["TX","tx"]"#, &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, PackError::DuplicateEntry { table: "permitless", .. }));
    }

    #[test]
    fn missing_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DatasetPaths {
            laws: dir.path().join("laws.json"),
            reciprocity: dir.path().join("reciprocity.json"),
            permitless: dir.path().join("permitless.json"),
        };
        let err = Dataset::from_files(&paths, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, PackError::FileNotFound { path } if path.ends_with("laws.json")));
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("laws.json"), LAWS).unwrap();
        std::fs::write(dir.path().join("reciprocity.json"), RECIPROCITY).unwrap();
        std::fs::write(dir.path().join("permitless.json"), r#"["TX"]"#).unwrap();
        let paths = DatasetPaths {
            laws: "laws.json".into(),
            reciprocity: "reciprocity.json".into(),
            permitless: "permitless.json".into(),
        }
        .relative_to(dir.path());
        let ds = Dataset::from_files(&paths, &LoadOptions::default()).unwrap();
        assert_eq!(ds.graph.len(), 2);
    }

    #[test]
    fn relative_to_keeps_absolute_paths() {
        let abs = std::env::temp_dir().join("laws.json");
        let paths = DatasetPaths {
            laws: abs.clone(),
            reciprocity: "r.json".into(),
            permitless: "p.json".into(),
        }
        .relative_to(Path::new("/srv/data"));
        assert_eq!(paths.laws, abs);
        assert_eq!(paths.reciprocity, Path::new("/srv/data/r.json"));
    }

    #[test]
    fn reject_policy_refuses_asymmetric_data() {
        let asymmetric = r#"[
            {"stateCode":"TX","honors":["NY"],"honoredBy":[]},
            {"stateCode":"NY","honors":[],"honoredBy":[]}
        ]"#;
        let warn = Dataset::from_json_strs(LAWS, asymmetric, r#"["TX"]"#, &LoadOptions::default())
            .unwrap();
        assert_eq!(warn.report.asymmetry_count(), 1);

        let reject = LoadOptions {
            asymmetry: AsymmetryPolicy::Reject,
        };
        let err = Dataset::from_json_strs(LAWS, asymmetric, r#"["TX"]"#, &reject).unwrap_err();
        assert!(matches!(err, PackError::AsymmetryRejected { count: 1 }));
    }
}
