//! CLI command for the console report

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ProjectPaths, Settings};
use crate::error::{CostError, CostResult};
use crate::models::Money;
use crate::reports::{ConsoleReport, ProjectReport, ReportSection};
use crate::storage::ProjectData;

/// Inputs shared by every command that computes a report
#[derive(Args, Debug, Clone, Default)]
pub struct ReportInputs {
    /// Override the total budget for this run (e.g. 1,000,000)
    #[arg(long)]
    pub budget: Option<String>,

    /// Read expenses from this JSON or CSV file instead of the data directory
    #[arg(long)]
    pub expenses: Option<PathBuf>,
}

impl ReportInputs {
    /// Load the project data and generate its report
    pub fn generate(
        &self,
        paths: &ProjectPaths,
        settings: &Settings,
    ) -> CostResult<(Settings, ProjectReport)> {
        let mut settings = settings.clone();
        if let Some(budget) = &self.budget {
            settings.total_budget = Money::parse(budget).map_err(|e| {
                CostError::Validation(format!("Invalid budget '{}': {}", budget, e))
            })?;
        }

        let mut data = ProjectData::load(paths)?;
        if let Some(path) = &self.expenses {
            data = data.with_expenses_from(path)?;
        }

        let report = ProjectReport::generate(&settings, &data)?;
        Ok((settings, report))
    }
}

/// Arguments for `buildcost report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub inputs: ReportInputs,

    /// Only print one section
    #[arg(short, long, value_enum, default_value_t = ReportSection::All)]
    pub section: ReportSection,
}

/// Handle the report command
pub fn handle_report_command(
    paths: &ProjectPaths,
    settings: &Settings,
    args: ReportArgs,
) -> CostResult<()> {
    let (settings, report) = args.inputs.generate(paths, settings)?;

    let color = std::io::stdout().is_terminal();
    let text = ConsoleReport::new(&report, &settings)
        .with_color(color)
        .format(args.section);
    println!("{}", text);

    Ok(())
}
