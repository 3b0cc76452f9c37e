//! Alumni list command - the registry table view
//!
//! Filter state comes from flags, falling back to config defaults.
//! Sorting is applied after filtering, never before.

use crate::config::GlobalConfig;
use crate::core::models::{AlumniFilter, SortColumn, SortDirection, SortSpec, StatusFilter};
use crate::core::services::{filter_alumni, sort_alumni};
use crate::core::services::validate::{MAX_GRADUATION_YEAR, MIN_GRADUATION_YEAR};
use crate::output::{AlumniListResult, AlumniRow, OutputMode};
use crate::registry::Registry;

/// View options collected from the CLI flags
#[derive(Debug, Default)]
pub struct AlumniListOptions {
    /// Search text (name or company)
    pub search: Option<String>,
    /// Status selector, unparsed; bad values degrade to the wildcard
    pub status: Option<String>,
    /// Lower graduation-year bound
    pub year_from: Option<i32>,
    /// Upper graduation-year bound
    pub year_to: Option<i32>,
    /// Sort column
    pub sort: Option<SortColumn>,
    /// Sort descending
    pub desc: bool,
}

/// List alumni matching the filter, sorted as requested
pub fn alumni_list(
    options: AlumniListOptions,
    config: &GlobalConfig,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let registry = Registry::seeded();

    let filter = build_filter(&options, config);
    let sort = build_sort(&options, config);

    let filtered = filter_alumni(registry.alumni(), &filter);
    let shown = filtered.len();
    let rows = sort_alumni(filtered, sort);

    let result = AlumniListResult {
        rows: rows.iter().map(|a| AlumniRow::from_alumni(a)).collect(),
        shown,
        total: registry.alumni().len(),
    };

    result.render(output_mode);
    Ok(())
}

fn build_filter(options: &AlumniListOptions, config: &GlobalConfig) -> AlumniFilter {
    let status_input = options.status.as_deref().or(config.defaults.status.as_deref());
    let status = status_input.map(|raw| parse_status_lenient(raw));

    let year_range = match (options.year_from, options.year_to) {
        (None, None) => None,
        (lo, hi) => {
            Some((lo.unwrap_or(MIN_GRADUATION_YEAR), hi.unwrap_or(MAX_GRADUATION_YEAR)))
        },
    };

    AlumniFilter { search: options.search.clone(), status, year_range }
}

/// A malformed status selector must not fail the render; fall back to
/// the wildcard and say so.
fn parse_status_lenient(raw: &str) -> StatusFilter {
    raw.parse().unwrap_or_else(|err| {
        log::warn!("ignoring status filter: {err}");
        StatusFilter::All
    })
}

fn build_sort(options: &AlumniListOptions, config: &GlobalConfig) -> Option<SortSpec> {
    let column = options.sort.or_else(|| {
        let raw = config.defaults.sort.as_deref()?;
        match raw.parse() {
            Ok(column) => Some(column),
            Err(err) => {
                log::warn!("ignoring configured default sort: {err}");
                None
            },
        }
    })?;

    let direction = if options.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    Some(SortSpec { column, direction })
}
