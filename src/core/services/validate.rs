//! Record validation for add operations
//!
//! Explicit validation functions returning a tagged success/failure
//! result. Every rule is checked and every failure collected, so the
//! caller can report the complete field-error list in one pass.
//!
//! The core never receives invalid records: drafts are validated here,
//! at the boundary, and only materialized records enter the registry.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::core::models::{Alumni, FundingStatus, Project, ProjectStatus};

/// One mailbox, one `@`, a dot somewhere in the domain. Deliberately
/// loose; the registry is not an MTA.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Earliest plausible graduation year
pub const MIN_GRADUATION_YEAR: i32 = 1950;
/// Latest plausible graduation year
pub const MAX_GRADUATION_YEAR: i32 = 2030;

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;
const MAX_LOCATION_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 500;

/// A single validation failure, naming the offending field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as exposed on the CLI
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Outcome of validating a draft record
#[derive(Debug, Clone)]
pub enum Validated<T> {
    /// Draft passed every rule and materialized into a record
    Valid(T),
    /// One or more rules failed; nothing was materialized
    Invalid(Vec<FieldError>),
}

impl<T> Validated<T> {
    /// True for the `Valid` variant
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Unvalidated alumni input, as collected from the CLI flags
#[derive(Debug, Clone, Default)]
pub struct AlumniDraft {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Graduation year
    pub graduation_year: i32,
    /// Degree label
    pub degree: String,
    /// Current employer
    pub company: String,
    /// Current role
    pub role: String,
    /// Engagement stage; defaults to `potential` for new prospects
    pub funding_status: FundingStatus,
    /// Free-text location
    pub location: String,
}

/// Unvalidated project input
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    /// Project name
    pub name: String,
    /// Short description
    pub description: String,
    /// Fundraising goal
    pub target_amount: u64,
    /// Lifecycle stage; defaults to `planning`
    pub status: ProjectStatus,
    /// Start date as `YYYY-MM-DD`
    pub start_date: String,
}

/// Validate an alumni draft and materialize it
///
/// `id` and `today` come from the caller so this stays a pure function.
/// A fresh record starts with zero contributions and today as its
/// last-contact date.
#[must_use]
pub fn validate_alumni(draft: &AlumniDraft, id: String, today: NaiveDate) -> Validated<Alumni> {
    let mut errors = Vec::new();

    let name = required_text("name", draft.name.trim(), MAX_NAME_LEN, &mut errors);
    let degree = required_text("degree", draft.degree.trim(), MAX_NAME_LEN, &mut errors);
    let company = required_text("company", draft.company.trim(), MAX_NAME_LEN, &mut errors);
    let role = required_text("role", draft.role.trim(), MAX_NAME_LEN, &mut errors);
    let location = required_text("location", draft.location.trim(), MAX_LOCATION_LEN, &mut errors);

    let email = draft.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if email.len() > MAX_EMAIL_LEN {
        errors.push(FieldError::new("email", format!("Must be at most {MAX_EMAIL_LEN} characters")));
    } else if !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Invalid email"));
    }

    if !(MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&draft.graduation_year) {
        errors.push(FieldError::new(
            "year",
            format!("Invalid year: must be between {MIN_GRADUATION_YEAR} and {MAX_GRADUATION_YEAR}"),
        ));
    }

    if !errors.is_empty() {
        return Validated::Invalid(errors);
    }

    Validated::Valid(Alumni {
        id,
        name,
        email: email.to_string(),
        graduation_year: draft.graduation_year,
        degree,
        company,
        role,
        funding_status: draft.funding_status,
        total_contributed: 0,
        last_contact_date: today,
        location,
    })
}

/// Validate a project draft and materialize it
///
/// A fresh project starts with nothing raised and no contributors.
#[must_use]
pub fn validate_project(draft: &ProjectDraft, id: String) -> Validated<Project> {
    let mut errors = Vec::new();

    let name = required_text("name", draft.name.trim(), MAX_NAME_LEN, &mut errors);
    let description =
        required_text("description", draft.description.trim(), MAX_DESCRIPTION_LEN, &mut errors);

    if draft.target_amount == 0 {
        errors.push(FieldError::new("target", "Target amount must be greater than 0"));
    }

    let start_date = match parse_date(draft.start_date.trim()) {
        Ok(date) => Some(date),
        Err(message) => {
            errors.push(FieldError::new("start-date", message));
            None
        },
    };

    let (Some(start_date), true) = (start_date, errors.is_empty()) else {
        return Validated::Invalid(errors);
    };

    Validated::Valid(Project {
        id,
        name,
        description,
        target_amount: draft.target_amount,
        raised_amount: 0,
        status: draft.status,
        alumni_count: 0,
        start_date,
    })
}

fn required_text(
    field: &'static str,
    value: &str,
    max_len: usize,
    errors: &mut Vec<FieldError>,
) -> String {
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", capitalize(field))));
    } else if value.len() > max_len {
        errors.push(FieldError::new(field, format!("Must be at most {max_len} characters")));
    }
    value.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| c.to_uppercase().chain(chars).collect())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    if s.is_empty() {
        return Err("Start date is required".to_string());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {s}. Use YYYY-MM-DD"))
}
