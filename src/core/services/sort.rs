//! Sort engine for tabular views
//!
//! Stable column sorting over borrowed rows. Sorting never mutates the
//! registry; it reorders a view that has already been filtered.

use std::cmp::Ordering;

use crate::core::models::{Alumni, SortColumn, SortDirection, SortSpec};

/// Sort a derived view of alumni rows by column and direction
///
/// `None` returns the input order unchanged. The sort is stable: rows
/// comparing equal on the column keep their relative (pre-sort) order,
/// in both directions. Descending reverses the comparator, not the
/// output, so tie groups are not flipped internally.
#[must_use]
pub fn sort_alumni<'a>(mut rows: Vec<&'a Alumni>, sort: Option<SortSpec>) -> Vec<&'a Alumni> {
    let Some(spec) = sort else {
        return rows;
    };

    rows.sort_by(|a, b| {
        let ord = compare_column(a, b, spec.column);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}

/// Natural ordering for a single column: case-insensitive lexicographic
/// for text, numeric for year/amounts, canonical label order for status.
fn compare_column(a: &Alumni, b: &Alumni, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => cmp_text(&a.name, &b.name),
        SortColumn::Company => cmp_text(&a.company, &b.company),
        SortColumn::Year => a.graduation_year.cmp(&b.graduation_year),
        SortColumn::Status => a.funding_status.as_str().cmp(b.funding_status.as_str()),
        SortColumn::Contributed => a.total_contributed.cmp(&b.total_contributed),
        SortColumn::Location => cmp_text(&a.location, &b.location),
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
