//! Pricing tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a tool charges its users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    /// No charge
    Free,
    /// Free tier with paid upgrades
    Freemium,
    /// Paid only
    Paid,
}

impl Pricing {
    /// Every tier, in display order
    pub const ALL: [Pricing; 3] = [Pricing::Free, Pricing::Freemium, Pricing::Paid];

    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "freemium" => Some(Self::Freemium),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    /// Lowercase name as used in catalog files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Paid => "paid",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
