//! Alumni record model
//!
//! An alumni is a donor (or prospective donor) in the registry, with a
//! funding status tracking where they sit in the engagement pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An alumni donor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alumni {
    /// Unique identifier within the registry
    pub id: String,

    /// Full name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Graduation year
    pub graduation_year: i32,

    /// Degree label (e.g., "MBA", "MS CS")
    pub degree: String,

    /// Current employer
    pub company: String,

    /// Current role/title
    pub role: String,

    /// Donor engagement stage
    pub funding_status: FundingStatus,

    /// Total amount contributed to date, in whole currency units
    pub total_contributed: u64,

    /// Date of the most recent contact
    pub last_contact_date: NaiveDate,

    /// Free-text location
    pub location: String,
}

/// Donor engagement stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingStatus {
    /// Actively contributing
    Active,
    /// Identified prospect, not yet approached
    #[default]
    Potential,
    /// Outreach made, no commitment yet
    Contacted,
    /// Committed to a contribution
    Committed,
    /// No longer engaged
    Inactive,
}

impl FundingStatus {
    /// Canonical lowercase label, as serialized
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Potential => "potential",
            Self::Contacted => "contacted",
            Self::Committed => "committed",
            Self::Inactive => "inactive",
        }
    }

    /// All statuses, in canonical declaration order
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Active, Self::Potential, Self::Contacted, Self::Committed, Self::Inactive]
    }
}

impl std::fmt::Display for FundingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FundingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "potential" | "prospect" => Ok(Self::Potential),
            "contacted" => Ok(Self::Contacted),
            "committed" => Ok(Self::Committed),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!(
                "Invalid funding status: {s}. Use: active, potential, contacted, committed, inactive"
            )),
        }
    }
}
