//! # Dataset Validation
//!
//! Two layers run when a dataset is assembled:
//!
//! 1. **Referential integrity** (fatal): every code named anywhere resolves
//!    to a law record, and every law record has a reciprocity entry.
//! 2. **Data quality** (non-fatal): findings collected into a
//!    [`ValidationReport`] and logged at `warn`. Asymmetric edges become
//!    fatal only under [`AsymmetryPolicy::Reject`].

use carrymap_core::StateCode;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};
use crate::graph::{ReciprocityEntry, ReciprocityGraph};
use crate::laws::LawTable;
use crate::permitless::PermitlessSet;

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// A non-fatal data-quality observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Finding {
    /// `honoring` lists `permit` in its honors, but `permit`'s declared
    /// `honoredBy` omits `honoring`.
    MissingBacklink {
        permit: StateCode,
        honoring: StateCode,
    },
    /// `permit` declares `claimed_by` in its `honoredBy`, but `claimed_by`
    /// does not list `permit` in its honors.
    UnbackedClaim {
        permit: StateCode,
        claimed_by: StateCode,
    },
    /// A state lists itself in its own honors.
    SelfEdge { state: StateCode },
    /// The same code appears more than once in one honors list.
    DuplicateEdge { state: StateCode, target: StateCode },
    /// The law record's `permitlessCarry` flag disagrees with the
    /// permitless-carry set.
    PermitlessFlagMismatch {
        state: StateCode,
        flag: bool,
        listed: bool,
    },
    /// Stand Your Ground and duty to retreat are both set.
    ConflictingDoctrine { state: StateCode },
}

impl Finding {
    /// Whether this finding is an asymmetric edge.
    pub fn is_asymmetry(&self) -> bool {
        matches!(self, Self::MissingBacklink { .. } | Self::UnbackedClaim { .. })
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBacklink { permit, honoring } => write!(
                f,
                "{honoring} honors {permit} permits, but {permit}'s honoredBy omits {honoring}"
            ),
            Self::UnbackedClaim { permit, claimed_by } => write!(
                f,
                "{permit} lists {claimed_by} in honoredBy, but {claimed_by} does not honor {permit} permits"
            ),
            Self::SelfEdge { state } => write!(f, "{state} lists itself in honors"),
            Self::DuplicateEdge { state, target } => {
                write!(f, "{state} lists {target} more than once in honors")
            }
            Self::PermitlessFlagMismatch {
                state,
                flag,
                listed,
            } => write!(
                f,
                "{state} has permitlessCarry={flag} but is {}in the permitless set",
                if *listed { "" } else { "not " }
            ),
            Self::ConflictingDoctrine { state } => write!(
                f,
                "{state} has both Stand Your Ground and a duty to retreat"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Report and policy
// ---------------------------------------------------------------------------

/// Findings collected while assembling a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of asymmetric-edge findings, counting both directions.
    pub fn asymmetry_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_asymmetry()).count()
    }

    /// Emit a single `warn` summary when there are findings. Individual
    /// findings go to `debug`.
    pub fn log(&self) {
        if self.is_clean() {
            return;
        }
        for finding in &self.findings {
            tracing::debug!(finding = %finding, "reciprocity data finding");
        }
        tracing::warn!(
            findings = self.findings.len(),
            asymmetries = self.asymmetry_count(),
            "reciprocity data has findings"
        );
    }
}

/// What to do when asymmetric edges are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsymmetryPolicy {
    /// Load the dataset and report the asymmetries.
    #[default]
    Warn,
    /// Refuse to load.
    Reject,
}

impl AsymmetryPolicy {
    /// Apply the policy to a report.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::AsymmetryRejected`] under `Reject` when the
    /// report contains asymmetric edges.
    pub fn enforce(self, report: &ValidationReport) -> PackResult<()> {
        let count = report.asymmetry_count();
        match self {
            Self::Reject if count > 0 => Err(PackError::AsymmetryRejected { count }),
            Self::Reject | Self::Warn => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Referential integrity
// ---------------------------------------------------------------------------

/// Check that the three tables reference one another consistently.
///
/// # Errors
///
/// - [`PackError::DanglingReference`] for a graph entry, honors or
///   `honoredBy` member, or permitless code with no law record.
/// - [`PackError::MissingGraphEntry`] for a law record with no reciprocity
///   entry.
pub fn check_references(
    laws: &LawTable,
    entries: &[ReciprocityEntry],
    permitless: &PermitlessSet,
) -> PackResult<()> {
    let dangling = |context: String, code: &StateCode| -> PackResult<()> {
        if laws.contains(code.as_str()) {
            Ok(())
        } else {
            Err(PackError::DanglingReference {
                context,
                code: code.clone(),
            })
        }
    };

    for entry in entries {
        let state = &entry.state_code;
        dangling("reciprocity entry".to_string(), state)?;
        for target in &entry.honors {
            dangling(format!("honors list of {state}"), target)?;
        }
        for source in &entry.honored_by {
            dangling(format!("honoredBy list of {state}"), source)?;
        }
    }

    for code in permitless.iter() {
        dangling("permitless set".to_string(), code)?;
    }

    for code in laws.codes() {
        if !entries.iter().any(|e| &e.state_code == code) {
            return Err(PackError::MissingGraphEntry { code: code.clone() });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Data quality
// ---------------------------------------------------------------------------

/// Collect every non-fatal finding. Finding order is deterministic: edge
/// findings from the raw entries, then asymmetries, then per-record checks.
pub fn collect_findings(
    laws: &LawTable,
    entries: &[ReciprocityEntry],
    graph: &ReciprocityGraph,
    permitless: &PermitlessSet,
) -> ValidationReport {
    let mut findings = Vec::new();

    for entry in entries {
        let state = &entry.state_code;
        let mut seen = std::collections::BTreeSet::new();
        for target in &entry.honors {
            if target == state {
                findings.push(Finding::SelfEdge {
                    state: state.clone(),
                });
            } else if !seen.insert(target) {
                findings.push(Finding::DuplicateEdge {
                    state: state.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    for (honoring, permit) in graph.edges() {
        let declared = graph
            .declared_honored_by(permit.as_str())
            .is_some_and(|set| set.contains(honoring));
        if !declared {
            findings.push(Finding::MissingBacklink {
                permit: permit.clone(),
                honoring: honoring.clone(),
            });
        }
    }

    for (permit, claimed_by) in graph.declared_edges() {
        if !graph.has_edge(claimed_by.as_str(), permit.as_str()) {
            findings.push(Finding::UnbackedClaim {
                permit: permit.clone(),
                claimed_by: claimed_by.clone(),
            });
        }
    }

    for law in laws.all() {
        let listed = permitless.contains(law.state_code.as_str());
        if law.permitless_carry != listed {
            findings.push(Finding::PermitlessFlagMismatch {
                state: law.state_code.clone(),
                flag: law.permitless_carry,
                listed,
            });
        }
        if law.stand_your_ground && law.duty_to_retreat {
            findings.push(Finding::ConflictingDoctrine {
                state: law.state_code.clone(),
            });
        }
    }

    ValidationReport { findings }
}
