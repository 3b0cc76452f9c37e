//! Projects list command - campaign cards with progress

use crate::output::{OutputMode, ProjectListResult, ProjectProgressRow};
use crate::registry::Registry;

/// List all fundraising projects with display progress
pub fn projects_list(output_mode: OutputMode) -> anyhow::Result<()> {
    let registry = Registry::seeded();

    let result = ProjectListResult {
        projects: registry.projects().iter().map(ProjectProgressRow::from_project).collect(),
    };

    result.render(output_mode);
    Ok(())
}
