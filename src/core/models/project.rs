//! Fundraising project model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fundraising campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the registry
    pub id: String,

    /// Project name
    pub name: String,

    /// Short description
    pub description: String,

    /// Fundraising goal, in whole currency units
    pub target_amount: u64,

    /// Amount raised so far; may exceed the target
    pub raised_amount: u64,

    /// Campaign lifecycle stage
    pub status: ProjectStatus,

    /// Number of alumni contributors
    pub alumni_count: u32,

    /// Campaign start date
    pub start_date: NaiveDate,
}

impl Project {
    /// Display progress as a percentage, clamped to [0, 100].
    ///
    /// A zero target yields 0.0 rather than dividing by zero. Stored
    /// amounts themselves are never clamped.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount == 0 {
            return 0.0;
        }
        let raw = (self.raised_amount as f64 / self.target_amount as f64) * 100.0;
        raw.clamp(0.0, 100.0)
    }
}

/// Campaign lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Accepting contributions
    Active,
    /// Goal reached, campaign closed
    Completed,
    /// Not yet launched
    #[default]
    Planning,
}

impl ProjectStatus {
    /// Canonical lowercase label, as serialized
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Planning => "planning",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            "planning" => Ok(Self::Planning),
            _ => Err(format!("Invalid project status: {s}. Use: active, completed, planning")),
        }
    }
}
