//! Alumni management commands - add and import

use std::path::Path;

use crate::cli::app::AlumniAction;
use crate::core::services::{validate_alumni, AlumniDraft, Validated};
use crate::output::{AddResult, OperationResult, OutputMode};
use crate::registry::Registry;

/// Spreadsheet extensions the import stub accepts
const IMPORT_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "csv"];

/// Dispatch an alumni management action
pub fn alumni_manage(action: AlumniAction, output_mode: OutputMode) -> anyhow::Result<()> {
    match action {
        AlumniAction::Add {
            name,
            email,
            year,
            degree,
            company,
            role,
            status,
            location,
        } => {
            let draft = AlumniDraft {
                name,
                email,
                graduation_year: year,
                degree,
                company,
                role,
                funding_status: status,
                location,
            };
            add(&draft, output_mode)
        },
        AlumniAction::Import { file } => import(&file, output_mode),
    }
}

fn add(draft: &AlumniDraft, output_mode: OutputMode) -> anyhow::Result<()> {
    let mut registry = Registry::seeded();
    let id = registry.next_alumni_id();
    let today = chrono::Local::now().date_naive();

    let result = match validate_alumni(draft, id, today) {
        Validated::Valid(alumni) => {
            let message = format!(
                "Added {} (id {}) to the registry. Records are session-local and not persisted.",
                alumni.name, alumni.id
            );
            registry.add_alumni(alumni);
            AddResult { success: true, message, errors: Vec::new() }
        },
        Validated::Invalid(errors) => AddResult {
            success: false,
            message: format!("Alumni record rejected: {} field error(s)", errors.len()),
            errors,
        },
    };

    result.render(output_mode);
    Ok(())
}

/// Bulk import is a stub: the file is accepted by extension only, and
/// the command says so instead of pretending to process it.
fn import(file: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let extension = file.extension().and_then(|e| e.to_str()).map(str::to_lowercase);

    let result = match extension.as_deref() {
        Some(ext) if IMPORT_EXTENSIONS.contains(&ext) => OperationResult {
            success: false,
            message: format!(
                "Accepted {}, but spreadsheet import is not implemented yet; \
                 no records were created. Use 'fundtrack alumni add' instead.",
                file.display()
            ),
        },
        _ => OperationResult {
            success: false,
            message: format!(
                "Invalid file type: {}. Please upload a .xlsx, .xls, or .csv file.",
                file.display()
            ),
        },
    };

    result.render(output_mode);
    Ok(())
}
