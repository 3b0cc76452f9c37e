//! Dashboard command - overview of the fund sourcing pipeline

use crate::core::services::compute_dashboard_metrics;
use crate::output::{DashboardResult, OutputMode, ProjectProgressRow, RecentActivityRow};
use crate::registry::Registry;

/// Show dashboard metrics over the full registry
pub fn dashboard(output_mode: OutputMode) -> anyhow::Result<()> {
    let registry = Registry::seeded();
    let metrics = compute_dashboard_metrics(registry.alumni(), registry.projects());

    let result = DashboardResult {
        total_raised: metrics.total_raised,
        alumni_count: metrics.alumni_count,
        committed_donors: metrics.committed_donors,
        active_projects: metrics.active_projects,
        recent_activity: metrics
            .recent_activity
            .iter()
            .map(|a| RecentActivityRow::from_alumni(a))
            .collect(),
        projects: registry.projects().iter().map(ProjectProgressRow::from_project).collect(),
    };

    result.render(output_mode);
    Ok(())
}
