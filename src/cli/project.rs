//! CLI commands for project setup and configuration

use crate::config::{ProjectPaths, Settings};
use crate::error::{CostError, CostResult};
use crate::models::Money;
use crate::storage::ProjectData;

/// Create the settings file and empty data files
///
/// Existing records are kept; an existing settings file only has its budget
/// replaced when `budget` is given.
pub fn handle_init_command(
    paths: &ProjectPaths,
    settings: &Settings,
    budget: Option<&str>,
) -> CostResult<Settings> {
    let mut settings = settings.clone();
    if let Some(budget) = budget {
        settings.total_budget = Money::parse(budget).map_err(|e| {
            CostError::Validation(format!("Invalid budget '{}': {}", budget, e))
        })?;
    }
    settings.validate()?;

    println!("Initializing buildcost at: {}", paths.base_dir().display());
    paths.ensure_directories()?;
    settings.save(paths)?;

    let data = ProjectData::load(paths)?;
    data.save(paths)?;

    println!("Initialization complete!");
    println!();
    println!("Total budget: {}", settings.format_money(settings.total_budget));
    println!("Add records to:");
    println!("  {}", paths.expenses_file().display());
    println!("  {}", paths.outstanding_balances_file().display());
    println!("  {}", paths.pending_purchases_file().display());

    Ok(settings)
}

/// Print paths and settings
pub fn handle_config_command(paths: &ProjectPaths, settings: &Settings) -> CostResult<()> {
    println!("buildcost configuration");
    println!("=======================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Data directory:    {}", paths.data_dir().display());
    println!("Reports directory: {}", paths.reports_dir().display());
    println!("Initialized:       {}", paths.is_initialized());
    println!();
    println!("Settings:");
    println!("  Project:         {}", settings.project_name);
    if let Some(start) = settings.format_start_date() {
        println!("  Start date:      {}", start);
    }
    println!("  Total budget:    {}", settings.format_money(settings.total_budget));
    println!("  Unpaid marker:   {}", settings.unpaid_marker);
    println!("  Contingency:     {}%", settings.contingency_percent);
    println!("  Fee tiers:       {}", settings.fee_schedule.tiers().len());

    Ok(())
}
