//! The set of jurisdictions that allow permitless (constitutional) carry.

use std::collections::BTreeSet;

use carrymap_core::StateCode;
use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// Permitless-carry jurisdictions, ordered by code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermitlessSet(BTreeSet<StateCode>);

impl<'de> Deserialize<'de> for PermitlessSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let codes = Vec::<StateCode>::deserialize(deserializer)?;
        Self::from_codes(codes).map_err(serde::de::Error::custom)
    }
}

impl PermitlessSet {
    /// Build the set from a raw code list.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DuplicateEntry`] if a code is listed twice.
    pub fn from_codes(codes: Vec<StateCode>) -> PackResult<Self> {
        let mut set = BTreeSet::new();
        for code in codes {
            if set.contains(&code) {
                return Err(PackError::DuplicateEntry {
                    table: "permitless",
                    code,
                });
            }
            set.insert(code);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
