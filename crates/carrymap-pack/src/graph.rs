//! # Reciprocity Graph
//!
//! A directed graph over state codes. The edge `B → A` (stored as
//! `A ∈ honors[B]`) means state B honors permits issued by state A.
//!
//! ## Derived `honored_by`
//!
//! The inverse relation, "which states honor A's permit", is computed from
//! the `honors` edges when the graph is built and is never read from the
//! source data. The source data's hand-maintained `honoredBy` lists are
//! retained as [`ReciprocityGraph::declared_honored_by`] so validation can
//! report where the two disagree.
//!
//! Self edges and repeated edges in the source are dropped here. Validation
//! reports them as findings against the raw entries.

use std::collections::{BTreeMap, BTreeSet};

use carrymap_core::StateCode;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// One raw row of the reciprocity source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReciprocityEntry {
    pub state_code: StateCode,
    /// States whose permits this state honors.
    pub honors: Vec<StateCode>,
    /// Hand-maintained inverse list. Informational only.
    #[serde(default)]
    pub honored_by: Vec<StateCode>,
}

type Adjacency = BTreeMap<StateCode, BTreeSet<StateCode>>;

/// The reciprocity graph with its derived inverse.
#[derive(Debug, Clone, Default)]
pub struct ReciprocityGraph {
    honors: Adjacency,
    honored_by: Adjacency,
    declared_honored_by: Adjacency,
}

impl ReciprocityGraph {
    /// Build the graph from raw entries.
    ///
    /// Every entry's state gets a (possibly empty) derived `honored_by` set.
    /// Edge targets that have no entry of their own still receive a derived
    /// set; referential checks against the law table catch them later.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicateEntry`] if a state has two entries.
    pub fn from_entries(entries: &[ReciprocityEntry]) -> PackResult<Self> {
        let mut graph = Self::default();

        for entry in entries {
            let code = &entry.state_code;
            if graph.honors.contains_key(code) {
                return Err(PackError::DuplicateEntry {
                    table: "reciprocity",
                    code: code.clone(),
                });
            }
            let targets: BTreeSet<StateCode> = entry
                .honors
                .iter()
                .filter(|target| *target != code)
                .cloned()
                .collect();
            let declared: BTreeSet<StateCode> = entry
                .honored_by
                .iter()
                .filter(|source| *source != code)
                .cloned()
                .collect();
            graph.honors.insert(code.clone(), targets);
            graph.declared_honored_by.insert(code.clone(), declared);
            graph.honored_by.entry(code.clone()).or_default();
        }

        for (honoring, targets) in &graph.honors {
            for permit in targets {
                graph
                    .honored_by
                    .entry(permit.clone())
                    .or_default()
                    .insert(honoring.clone());
            }
        }

        Ok(graph)
    }

    /// Whether the state has its own entry.
    pub fn has_entry(&self, code: &str) -> bool {
        self.honors.contains_key(code)
    }

    /// States whose permits `code` honors. `None` when `code` has no entry.
    pub fn honors(&self, code: &str) -> Option<&BTreeSet<StateCode>> {
        self.honors.get(code)
    }

    /// States that honor `code`'s permit, derived from `honors`.
    pub fn honored_by(&self, code: &str) -> Option<&BTreeSet<StateCode>> {
        self.honored_by.get(code)
    }

    /// The source data's own `honoredBy` list for `code`.
    pub fn declared_honored_by(&self, code: &str) -> Option<&BTreeSet<StateCode>> {
        self.declared_honored_by.get(code)
    }

    /// Whether `honoring` honors permits from `permit`.
    pub fn has_edge(&self, honoring: &str, permit: &str) -> bool {
        self.honors
            .get(honoring)
            .is_some_and(|targets| targets.contains(permit))
    }

    /// States with an entry, ascending.
    pub fn codes(&self) -> impl Iterator<Item = &StateCode> {
        self.honors.keys()
    }

    /// Every `(honoring, permit)` edge, ordered.
    pub fn edges(&self) -> impl Iterator<Item = (&StateCode, &StateCode)> {
        self.honors
            .iter()
            .flat_map(|(honoring, targets)| targets.iter().map(move |permit| (honoring, permit)))
    }

    /// Every declared `(permit, claimed_by)` pair, ordered.
    pub fn declared_edges(&self) -> impl Iterator<Item = (&StateCode, &StateCode)> {
        self.declared_honored_by
            .iter()
            .flat_map(|(permit, sources)| sources.iter().map(move |source| (permit, source)))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.honors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.honors.is_empty()
    }
}
