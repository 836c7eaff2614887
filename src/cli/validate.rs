//! CLI command for checking an exported dashboard file

use std::path::Path;

use crate::error::{CostError, CostResult};
use crate::export::{import_dashboard_json, import_dashboard_yaml, DashboardExport};

/// Read a dashboard file, choosing the parser from its extension
pub fn read_dashboard(path: &Path) -> CostResult<DashboardExport> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let contents = std::fs::read_to_string(path)?;
    match extension.as_deref() {
        Some("json") => import_dashboard_json(&contents),
        Some("yaml") | Some("yml") => import_dashboard_yaml(&contents),
        _ => Err(CostError::Validation(format!(
            "{} is not a JSON or YAML dashboard file",
            path.display()
        ))),
    }
}

/// Handle the validate command
pub fn handle_validate_command(path: &Path) -> CostResult<()> {
    let export = read_dashboard(path)?;

    tracing::info!(file = %path.display(), "dashboard file is consistent");
    println!("Dashboard file is valid: {}", path.display());
    println!("  Project:      {}", export.project_info.name);
    println!("  Expenses:     {}", export.daily_expenses.len());
    println!("  Last updated: {}", export.last_updated);

    Ok(())
}
