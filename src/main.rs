use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use buildcost::cli::{
    handle_config_command, handle_export_command, handle_fee_command, handle_fees_command,
    handle_init_command, handle_report_command, handle_validate_command, ExportArgs, ReportArgs,
};
use buildcost::config::{ProjectPaths, Settings};

#[derive(Parser)]
#[command(
    name = "buildcost",
    version,
    about = "Construction budget calculator",
    long_about = "buildcost tracks spending on a building project against its budget. \
                  It adds mobile-money transfer fees to paid expenses, totals outstanding \
                  balances, unpaid labor and planned purchases, and estimates the final cost."
)]
struct Cli {
    /// Directory holding config.json, data/ and reports/
    #[arg(long, global = true, env = "BUILDCOST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the settings file and empty data files
    Init {
        /// Total budget for the project
        #[arg(long)]
        budget: Option<String>,
    },

    /// Print the cost report
    Report(ReportArgs),

    /// Export the dashboard document
    Export(ExportArgs),

    /// Show the transfer fee for an amount
    Fee {
        /// Amount to send
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List the transfer fee schedule
    Fees,

    /// Show current configuration and paths
    Config,

    /// Check an exported JSON or YAML dashboard file
    Validate {
        /// Dashboard file to check
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    buildcost::logging::init(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ProjectPaths::with_base_dir(dir),
        None => ProjectPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Init { budget } => {
            handle_init_command(&paths, &settings, budget.as_deref())?;
        }
        Commands::Report(args) => handle_report_command(&paths, &settings, args)?,
        Commands::Export(args) => handle_export_command(&paths, &settings, args)?,
        Commands::Fee { amount } => handle_fee_command(&settings, &amount)?,
        Commands::Fees => handle_fees_command(&settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
        Commands::Validate { file } => handle_validate_command(&file)?,
    }

    Ok(())
}
