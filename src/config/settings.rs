//! Project settings for buildcost
//!
//! Holds the overall budget, the fee schedule and the rules the calculations
//! run under. Settings are loaded once and passed by reference into every
//! calculation; nothing reads them from global state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ProjectPaths;
use crate::error::CostError;
use crate::models::{FeeSchedule, Money};

/// Project settings for buildcost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name shown in report headers and the dashboard document
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Date work started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_start: Option<NaiveDate>,

    /// The overall budget every percentage is measured against
    #[serde(default = "default_total_budget")]
    pub total_budget: Money,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Substring in an expense description that marks it unpaid
    #[serde(default = "default_unpaid_marker")]
    pub unpaid_marker: String,

    /// Contingency added on top of remaining work, as a whole percentage
    #[serde(default = "default_contingency_percent")]
    pub contingency_percent: u32,

    /// Transaction fee tiers
    #[serde(default)]
    pub fee_schedule: FeeSchedule,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_project_name() -> String {
    "Home Construction".to_string()
}

fn default_total_budget() -> Money {
    Money::from_units(1_000_000)
}

fn default_currency() -> String {
    "KES".to_string()
}

fn default_unpaid_marker() -> String {
    "UNPAID".to_string()
}

fn default_contingency_percent() -> u32 {
    15
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            project_name: default_project_name(),
            project_start: None,
            total_budget: default_total_budget(),
            currency_symbol: default_currency(),
            unpaid_marker: default_unpaid_marker(),
            contingency_percent: default_contingency_percent(),
            fee_schedule: FeeSchedule::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Settings with a different budget, everything else default
    pub fn with_budget(total_budget: Money) -> Self {
        Self {
            total_budget,
            ..Self::default()
        }
    }

    /// Reject settings the calculations cannot run under
    pub fn validate(&self) -> Result<(), CostError> {
        if !self.total_budget.is_positive() {
            return Err(CostError::Config(format!(
                "Total budget must be positive, got {}",
                self.total_budget
            )));
        }

        if self.total_budget > Money::MAX {
            return Err(CostError::Config(format!(
                "Total budget must not exceed {}, got {}",
                Money::MAX,
                self.total_budget
            )));
        }

        if self.contingency_percent > 100 {
            return Err(CostError::Config(format!(
                "Contingency percentage must be between 0 and 100, got {}",
                self.contingency_percent
            )));
        }

        self.fee_schedule.validate()
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the project start date, if set
    pub fn format_start_date(&self) -> Option<String> {
        self.project_start
            .map(|date| date.format(&self.date_format).to_string())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ProjectPaths) -> Result<Self, CostError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CostError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CostError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ProjectPaths) -> Result<(), CostError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CostError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CostError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
