//! # Map Shading
//!
//! Fill colors and legend entries for a choropleth of the jurisdictions.
//!
//! With no home state selected, states are shaded by law: permitless carry
//! first, then permit type. With a home selected, states are shaded by
//! their [`ReciprocityStatus`] relative to that home.
//!
//! Legends are built from the same shades the map uses, so a legend swatch
//! always matches the fill it describes.

use carrymap_core::{PermitType, ReciprocityStatus, StateLaw};
use serde::Serialize;

/// A map fill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapShade {
    // Law view.
    PermitlessCarry,
    Unrestricted,
    ShallIssue,
    MayIssue,
    NoIssue,
    // Reciprocity view.
    Home,
    Permitless,
    Full,
    Partial,
    NotHonored,
}

impl MapShade {
    /// Shade for a state when no home is selected.
    pub fn for_law(law: &StateLaw) -> Self {
        if law.permitless_carry {
            return Self::PermitlessCarry;
        }
        match law.permit_type {
            PermitType::Unrestricted => Self::Unrestricted,
            PermitType::ShallIssue => Self::ShallIssue,
            PermitType::MayIssue => Self::MayIssue,
            PermitType::NoIssue => Self::NoIssue,
        }
    }

    /// Shade for a state's status relative to a selected home.
    pub fn for_status(status: ReciprocityStatus) -> Self {
        match status {
            ReciprocityStatus::Home => Self::Home,
            ReciprocityStatus::Permitless => Self::Permitless,
            ReciprocityStatus::Full => Self::Full,
            ReciprocityStatus::Partial => Self::Partial,
            ReciprocityStatus::None => Self::NotHonored,
        }
    }

    /// Hex fill color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::PermitlessCarry => "#4caf50",
            Self::Unrestricted => "#2e7d32",
            Self::ShallIssue => "#ff9800",
            Self::MayIssue => "#f44336",
            Self::NoIssue => "#b71c1c",
            Self::Home => "#4a90d9",
            Self::Permitless => "#8bc34a",
            Self::Full => "#4caf50",
            Self::Partial => "#ff9800",
            Self::NotHonored => "#f44336",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PermitlessCarry => "Permitless Carry",
            Self::Unrestricted => "Unrestricted",
            Self::ShallIssue => "Shall-Issue",
            Self::MayIssue => "May-Issue",
            Self::NoIssue => "Restrictive",
            Self::Home => "Home State",
            Self::Permitless => "Permitless (No Permit Needed)",
            Self::Full => "Full Reciprocity",
            Self::Partial => "Partial Reciprocity",
            Self::NotHonored => "No Reciprocity",
        }
    }
}

/// One legend swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub shade: MapShade,
    pub color: &'static str,
    pub label: &'static str,
}

impl From<MapShade> for LegendEntry {
    fn from(shade: MapShade) -> Self {
        Self {
            shade,
            color: shade.color(),
            label: shade.label(),
        }
    }
}

/// Legend entries for the current view, in display order.
pub fn legend(home_selected: bool) -> Vec<LegendEntry> {
    let shades: &[MapShade] = if home_selected {
        &[
            MapShade::Home,
            MapShade::Full,
            MapShade::Permitless,
            MapShade::NotHonored,
        ]
    } else {
        &[
            MapShade::PermitlessCarry,
            MapShade::ShallIssue,
            MapShade::MayIssue,
            MapShade::NoIssue,
        ]
    };
    shades.iter().copied().map(LegendEntry::from).collect()
}
