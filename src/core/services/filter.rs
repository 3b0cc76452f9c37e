//! Filter engine for the alumni registry view
//!
//! This module contains pure filtering logic with no I/O dependencies.

use crate::core::models::{Alumni, AlumniFilter, StatusFilter};

/// Apply a filter state to the alumni sequence
///
/// Returns the order-preserving subsequence of records satisfying all
/// active predicates (logical AND):
///
/// - search: case-insensitive substring match against name or company
/// - status: exact funding-status match; `All` or absent matches all
/// - year range: inclusive graduation-year bounds
///
/// A filter state that fails validation (inverted year range) degrades
/// to "no filter" rather than failing the view. The registry table must
/// always render.
#[must_use]
pub fn filter_alumni<'a>(records: &'a [Alumni], filter: &AlumniFilter) -> Vec<&'a Alumni> {
    if let Err(err) = filter.validate() {
        log::warn!("ignoring invalid alumni filter: {err}");
        return records.iter().collect();
    }

    let needle = filter.search.as_deref().map(str::to_lowercase);

    records
        .iter()
        .filter(|a| matches_search(a, needle.as_deref()))
        .filter(|a| matches_status(a, filter.status))
        .filter(|a| matches_year_range(a, filter.year_range))
        .collect()
}

fn matches_search(alumni: &Alumni, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => {
            alumni.name.to_lowercase().contains(needle)
                || alumni.company.to_lowercase().contains(needle)
        },
    }
}

fn matches_status(alumni: &Alumni, status: Option<StatusFilter>) -> bool {
    match status {
        None | Some(StatusFilter::All) => true,
        Some(StatusFilter::Status(wanted)) => alumni.funding_status == wanted,
    }
}

fn matches_year_range(alumni: &Alumni, range: Option<(i32, i32)>) -> bool {
    range.is_none_or(|(lo, hi)| (lo..=hi).contains(&alumni.graduation_year))
}
