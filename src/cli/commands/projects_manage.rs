//! Project management commands - add

use crate::cli::app::ProjectAction;
use crate::core::services::{validate_project, ProjectDraft, Validated};
use crate::output::{AddResult, OutputMode};
use crate::registry::Registry;

/// Dispatch a project management action
pub fn projects_manage(action: ProjectAction, output_mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ProjectAction::Add {
            name,
            description,
            target,
            status,
            start_date,
        } => {
            let draft = ProjectDraft {
                name,
                description,
                target_amount: target,
                status,
                start_date,
            };
            add(&draft, output_mode)
        },
    }
}

fn add(draft: &ProjectDraft, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut registry = Registry::seeded();
    let id = registry.next_project_id();

    let result = match validate_project(draft, id) {
        Validated::Valid(project) => {
            let message = format!(
                "Created project {} (id {}). Records are session-local and not persisted.",
                project.name, project.id
            );
            registry.add_project(project);
            AddResult { success: true, message, errors: Vec::new() }
        },
        Validated::Invalid(errors) => AddResult {
            success: false,
            message: format!("Project rejected: {} field error(s)", errors.len()),
            errors,
        },
    };

    result.render(output_mode);
    Ok(())
}
