//! # Reciprocity Status Vocabulary
//!
//! The closed set of answers to "may a holder of state A's permit carry in
//! state B?". Every consumer matches on [`ReciprocityStatus`] exhaustively.
//!
//! `Partial` is part of the vocabulary but no resolution rule currently
//! produces it.

use serde::{Deserialize, Serialize};

/// Carry status of a target state relative to a home state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReciprocityStatus {
    /// Target is the home state.
    Home,
    /// Target allows permitless carry for any eligible visitor.
    Permitless,
    /// Target honors the home state's permit.
    Full,
    /// Conditional recognition. Never produced by the resolver.
    Partial,
    /// Target does not honor the home state's permit.
    None,
}

impl ReciprocityStatus {
    /// All statuses in display order.
    pub const ALL: [ReciprocityStatus; 5] = [
        Self::Home,
        Self::Permitless,
        Self::Full,
        Self::Partial,
        Self::None,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Permitless => "permitless",
            Self::Full => "full",
            Self::Partial => "partial",
            Self::None => "none",
        }
    }

    /// Short list label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Permitless => "Permitless",
            Self::Full => "Honored",
            Self::Partial => "Partial",
            Self::None => "Not Honored",
        }
    }

    /// Whether a visiting permit holder may carry under this status.
    /// `Home` is excluded: it is not a visit.
    pub fn permits_visitor_carry(&self) -> bool {
        match self {
            Self::Permitless | Self::Full => true,
            Self::Home | Self::Partial | Self::None => false,
        }
    }
}

impl std::fmt::Display for ReciprocityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serde_uses_lowercase_names() {
        for status in ReciprocityStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ReciprocityStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(ReciprocityStatus::Full.label(), "Honored");
        assert_eq!(ReciprocityStatus::None.label(), "Not Honored");
        assert_eq!(ReciprocityStatus::Permitless.to_string(), "permitless");
    }

    #[test]
    fn only_full_and_permitless_permit_visitor_carry() {
        let carrying: Vec<_> = ReciprocityStatus::ALL
            .iter()
            .filter(|s| s.permits_visitor_carry())
            .collect();
        assert_eq!(
            carrying,
            vec![&ReciprocityStatus::Permitless, &ReciprocityStatus::Full]
        );
    }
}
