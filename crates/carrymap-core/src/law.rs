//! # Jurisdiction Law Record
//!
//! [`StateLaw`] is one row of the jurisdiction law table: the carry-law
//! attributes of a single state. The record is immutable reference data.
//! The legal-text fields (`summary`, `key_provisions`, `source_url`,
//! `last_updated`) are informational and have no behavioral role.
//!
//! ## Wire Format
//!
//! Records are stored as JSON objects with camelCase keys. Enum values use
//! their kebab-case names (`"shall-issue"`, `"permit-required"`), and
//! `magazineRestriction` is either `null` or a positive integer.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::state::StateCode;

// ---------------------------------------------------------------------------
// Permit issuance
// ---------------------------------------------------------------------------

/// How a jurisdiction issues carry permits to its residents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermitType {
    /// No permit is needed or issued.
    Unrestricted,
    /// Permits must be granted to any eligible applicant.
    ShallIssue,
    /// Permits are granted at the issuing authority's discretion.
    MayIssue,
    /// Permits are not available.
    NoIssue,
}

impl PermitType {
    /// All permit types, most permissive first.
    pub const ALL: [PermitType; 4] = [
        Self::Unrestricted,
        Self::ShallIssue,
        Self::MayIssue,
        Self::NoIssue,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::ShallIssue => "shall-issue",
            Self::MayIssue => "may-issue",
            Self::NoIssue => "no-issue",
        }
    }

    /// Sentence-case label used in comparison tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unrestricted => "Unrestricted",
            Self::ShallIssue => "Shall issue",
            Self::MayIssue => "May issue",
            Self::NoIssue => "No issue",
        }
    }

    /// Title-case badge text.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Unrestricted => "Unrestricted",
            Self::ShallIssue => "Shall-Issue",
            Self::MayIssue => "May-Issue",
            Self::NoIssue => "No-Issue",
        }
    }
}

impl std::fmt::Display for PermitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Carry rules
// ---------------------------------------------------------------------------

/// Rule governing one mode of carry (open or concealed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CarryRule {
    /// Eligible persons may carry without a permit.
    Permitless,
    /// A permit is required.
    PermitRequired,
    /// Allowed only in narrow circumstances.
    Restricted,
    /// Not allowed.
    Prohibited,
}

impl CarryRule {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permitless => "permitless",
            Self::PermitRequired => "permit-required",
            Self::Restricted => "restricted",
            Self::Prohibited => "prohibited",
        }
    }

    /// Sentence-case label used in comparison tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Permitless => "Permitless",
            Self::PermitRequired => "Permit required",
            Self::Restricted => "Restricted",
            Self::Prohibited => "Prohibited",
        }
    }
}

impl std::fmt::Display for CarryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Magazine capacity
// ---------------------------------------------------------------------------

/// Magazine capacity restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagazineLimit {
    /// No capacity restriction.
    #[default]
    NoLimit,
    /// Magazines may hold at most this many rounds.
    Rounds(NonZeroU32),
}

impl MagazineLimit {
    /// Build a limit from a raw round count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroMagazineLimit`] for `0`.
    pub fn rounds(rounds: u32) -> Result<Self, ValidationError> {
        NonZeroU32::new(rounds)
            .map(Self::Rounds)
            .ok_or(ValidationError::ZeroMagazineLimit)
    }

    /// The round count, or `None` when unrestricted.
    pub fn as_rounds(&self) -> Option<u32> {
        match self {
            Self::NoLimit => None,
            Self::Rounds(n) => Some(n.get()),
        }
    }

    /// Whether a concrete limit applies.
    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Rounds(_))
    }

    /// The stricter of two limits. Any concrete limit is stricter than
    /// `NoLimit`; between two concrete limits the smaller one wins.
    pub fn stricter(self, other: Self) -> Self {
        match (self, other) {
            (Self::NoLimit, x) | (x, Self::NoLimit) => x,
            (Self::Rounds(a), Self::Rounds(b)) => Self::Rounds(a.min(b)),
        }
    }
}

impl std::fmt::Display for MagazineLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLimit => f.write_str("No limit"),
            Self::Rounds(n) => write!(f, "{n} rounds"),
        }
    }
}

impl Serialize for MagazineLimit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_rounds().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MagazineLimit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Option::<u32>::deserialize(deserializer)? {
            None => Ok(Self::NoLimit),
            Some(n) => Self::rounds(n).map_err(serde::de::Error::custom),
        }
    }
}

// ---------------------------------------------------------------------------
// StateLaw
// ---------------------------------------------------------------------------

/// Carry-law attributes of a single jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateLaw {
    /// Primary key.
    pub state_code: StateCode,
    /// Display name (e.g. "New Hampshire").
    pub state_name: String,
    /// Resident permit issuance policy.
    pub permit_type: PermitType,
    pub open_carry: CarryRule,
    pub concealed_carry: CarryRule,
    /// Any eligible person may carry concealed without a permit.
    pub permitless_carry: bool,
    pub permit_required_for_purchase: bool,
    pub universal_background_checks: bool,
    pub red_flag_law: bool,
    pub stand_your_ground: bool,
    pub castle_doctrine: bool,
    pub duty_to_retreat: bool,
    /// State law prevents localities from enacting stricter ordinances.
    pub preemption: bool,
    #[serde(default)]
    pub magazine_restriction: MagazineLimit,
    /// How firearms must be stored or transported in vehicles.
    #[serde(default)]
    pub transport_requirements: Option<String>,
    /// Ammunition-specific laws.
    #[serde(default)]
    pub ammo_restrictions: Option<String>,
    /// Official state source page.
    pub source_url: String,
    pub summary: String,
    #[serde(default)]
    pub key_provisions: Vec<String>,
    pub last_updated: NaiveDate,
}
