//! # Jurisdiction Law Table
//!
//! An indexed, immutable collection of [`StateLaw`] records. Lookup by code
//! is O(1); enumeration order is ascending state code and is stable across
//! calls.

use std::collections::HashMap;

use carrymap_core::{StateCode, StateLaw};

use crate::error::{PackError, PackResult};

/// The jurisdiction law table.
#[derive(Debug, Clone)]
pub struct LawTable {
    records: Vec<StateLaw>,
    index: HashMap<StateCode, usize>,
}

impl LawTable {
    /// Build a table from raw records.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicateEntry`] if two records share a code.
    pub fn from_records(mut records: Vec<StateLaw>) -> PackResult<Self> {
        records.sort_by(|a, b| a.state_code.cmp(&b.state_code));

        let mut index = HashMap::with_capacity(records.len());
        for (i, law) in records.iter().enumerate() {
            if index.insert(law.state_code.clone(), i).is_some() {
                return Err(PackError::DuplicateEntry {
                    table: "law",
                    code: law.state_code.clone(),
                });
            }
        }

        Ok(Self { records, index })
    }

    /// Look up a record by code.
    pub fn get(&self, code: &str) -> Option<&StateLaw> {
        self.index.get(code).map(|&i| &self.records[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// All records, ascending by state code.
    pub fn all(&self) -> &[StateLaw] {
        &self.records
    }

    /// All codes, ascending.
    pub fn codes(&self) -> impl Iterator<Item = &StateCode> {
        self.records.iter().map(|law| &law.state_code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a display name ("new hampshire") to its code. Matching is
    /// case-insensitive and ignores surrounding whitespace. Map boundary
    /// features are keyed by name, not code.
    pub fn code_for_name(&self, name: &str) -> Option<&StateCode> {
        let wanted = name.trim();
        self.records
            .iter()
            .find(|law| law.state_name.eq_ignore_ascii_case(wanted))
            .map(|law| &law.state_code)
    }
}
