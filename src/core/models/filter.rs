//! Filter and sort state
//!
//! Transient value objects owned by the CLI layer and passed into the
//! core services on every recomputation. The registry itself holds no
//! filter or sort state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FundingStatus;

/// Why a filter state failed validation
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Year range lower bound exceeds upper bound
    #[error("invalid year range: {0} > {1}")]
    InvertedYearRange(i32, i32),
}

/// Filter state for the alumni registry view
///
/// All predicates are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlumniFilter {
    /// Case-insensitive substring matched against name or company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Status selector; `All` is the wildcard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,

    /// Inclusive graduation-year bounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_range: Option<(i32, i32)>,
}

impl AlumniFilter {
    /// Check the filter state is well-formed
    pub fn validate(&self) -> Result<(), FilterError> {
        if let Some((lo, hi)) = self.year_range
            && lo > hi
        {
            return Err(FilterError::InvertedYearRange(lo, hi));
        }
        Ok(())
    }

    /// True when no predicate is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.status.is_none_or(|s| s == StatusFilter::All)
            && self.year_range.is_none()
    }
}

/// Status selector including the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Matches every record
    #[default]
    All,
    /// Matches records with exactly this funding status
    Status(FundingStatus),
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<FundingStatus>().map(Self::Status)
        }
    }
}

/// Sortable columns of the alumni registry table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    /// Full name (case-insensitive)
    Name,
    /// Company (case-insensitive)
    Company,
    /// Graduation year (numeric)
    Year,
    /// Funding status (canonical label order)
    Status,
    /// Total contributed (numeric)
    Contributed,
    /// Location (case-insensitive)
    Location,
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Year => "year",
            Self::Status => "status",
            Self::Contributed => "contributed",
            Self::Location => "location",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "company" => Ok(Self::Company),
            "year" | "graduation_year" => Ok(Self::Year),
            "status" => Ok(Self::Status),
            "contributed" | "amount" => Ok(Self::Contributed),
            "location" => Ok(Self::Location),
            _ => Err(format!(
                "Invalid sort column: {s}. Use: name, company, year, status, contributed, location"
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

/// Active sort: a column plus a direction. "No sort" is `Option::None`
/// at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to order by
    pub column: SortColumn,
    /// Direction to order in
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a column
    #[must_use]
    pub const fn ascending(column: SortColumn) -> Self {
        Self { column, direction: SortDirection::Ascending }
    }

    /// Descending sort on a column
    #[must_use]
    pub const fn descending(column: SortColumn) -> Self {
        Self { column, direction: SortDirection::Descending }
    }
}
