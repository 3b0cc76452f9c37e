//! Aggregation engine for the dashboard view
//!
//! Computes summary metrics over the complete, unfiltered registry.
//! Nothing is cached; the dataset is static for the session and the
//! computation is bounded, synchronous work.

use crate::core::models::{Alumni, FundingStatus, Project, ProjectStatus};

/// How many alumni the recent-activity list shows
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Dashboard metrics derived from the full registry
#[derive(Debug, Clone)]
pub struct DashboardMetrics<'a> {
    /// Sum of raised amounts across all projects
    pub total_raised: u64,
    /// Number of alumni records
    pub alumni_count: usize,
    /// Number of projects with status `active`
    pub active_projects: usize,
    /// Number of alumni with funding status `committed`
    pub committed_donors: usize,
    /// Top alumni by last-contact date, most recent first; ties keep
    /// registry order
    pub recent_activity: Vec<&'a Alumni>,
}

/// Compute dashboard metrics over the unfiltered registry
#[must_use]
pub fn compute_dashboard_metrics<'a>(
    alumni: &'a [Alumni],
    projects: &[Project],
) -> DashboardMetrics<'a> {
    let total_raised = projects.iter().map(|p| p.raised_amount).sum();
    let active_projects = projects.iter().filter(|p| p.status == ProjectStatus::Active).count();
    let committed_donors =
        alumni.iter().filter(|a| a.funding_status == FundingStatus::Committed).count();

    DashboardMetrics {
        total_raised,
        alumni_count: alumni.len(),
        active_projects,
        committed_donors,
        recent_activity: recent_activity(alumni),
    }
}

/// Most recently contacted alumni, most recent first
///
/// Stable on equal dates, so records sharing a date keep their registry
/// order.
#[must_use]
pub fn recent_activity(alumni: &[Alumni]) -> Vec<&Alumni> {
    let mut rows: Vec<&Alumni> = alumni.iter().collect();
    rows.sort_by(|a, b| b.last_contact_date.cmp(&a.last_contact_date));
    rows.truncate(RECENT_ACTIVITY_LIMIT);
    rows
}
