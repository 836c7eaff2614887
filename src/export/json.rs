//! JSON dashboard export
//!
//! Serializes a generated report into the document the HTML dashboard reads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::Settings;
use crate::error::{CostError, CostResult};
use crate::models::{Expense, Money, OutstandingBalance, PendingPurchaseItem};
use crate::reports::ProjectReport;
use crate::services::CategorySummaryRow;

/// Format of the `last_updated` timestamp
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Headline figures for the dashboard
///
/// Currency totals are whole units, truncated toward zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub start_date: Option<String>,
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_mpesa_fees: Money,
    pub total_cost: Money,
    pub balance_remaining: Money,
    /// Paid spending as a percentage of the budget, two decimals
    pub percentage_used: f64,
    /// Paid plus pending as a percentage of the budget, two decimals
    pub percentage_used_inclusive: f64,
    pub total_outstanding: Money,
    pub total_unpaid_labor: Money,
    pub total_pending: Money,
    pub total_committed: Money,
    pub effective_balance: Money,
    /// Pending purchases including the contingency row
    pub total_pending_purchases: Money,
    pub total_not_yet_paid: Money,
    pub total_project_cost: Money,
    pub additional_funds_needed: Money,
}

/// The full dashboard document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardExport {
    pub project_info: ProjectInfo,
    pub category_summary: Vec<CategorySummaryRow>,
    /// Every expense, paid and unpaid, in source order
    pub daily_expenses: Vec<Expense>,
    pub outstanding_balances: Vec<OutstandingBalance>,
    pub unpaid_expenses: Vec<Expense>,
    /// Pending purchases with the contingency row appended
    pub pending_purchases: Vec<PendingPurchaseItem>,
    pub last_updated: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl DashboardExport {
    /// Build the dashboard document from a generated report
    pub fn build(report: &ProjectReport, settings: &Settings, generated_at: NaiveDateTime) -> Self {
        let summary = &report.summary;
        let pending = &report.pending;
        let totals = &report.totals;

        let project_info = ProjectInfo {
            name: settings.project_name.clone(),
            start_date: settings.format_start_date(),
            total_budget: report.total_budget.truncated(),
            total_spent: summary.total_spent.truncated(),
            total_mpesa_fees: summary.total_mpesa_fees.truncated(),
            total_cost: summary.total_cost.truncated(),
            balance_remaining: summary.balance_remaining.truncated(),
            percentage_used: round2(summary.percentage_used),
            percentage_used_inclusive: round2(totals.percentage_used_inclusive),
            total_outstanding: pending.total_outstanding.truncated(),
            total_unpaid_labor: pending.total_unpaid_labor.truncated(),
            total_pending: pending.total_pending.truncated(),
            total_committed: totals.total_committed.truncated(),
            effective_balance: totals.effective_balance.truncated(),
            total_pending_purchases: pending.total_pending_purchases_with_contingency.truncated(),
            total_not_yet_paid: totals.total_not_yet_paid.truncated(),
            total_project_cost: totals.total_project_cost.truncated(),
            additional_funds_needed: totals.additional_funds_needed.truncated(),
        };

        Self {
            project_info,
            category_summary: report.categories.clone(),
            daily_expenses: report.expenses.clone(),
            outstanding_balances: report.outstanding_balances.clone(),
            unpaid_expenses: pending.unpaid_expenses.clone(),
            pending_purchases: pending.pending_purchases_with_contingency.clone(),
            last_updated: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Check the document's totals against its own rows
    pub fn validate(&self) -> Result<(), String> {
        let info = &self.project_info;

        let category_total: Money = self.category_summary.iter().map(|c| c.total_cost).sum();
        if category_total.truncated() != info.total_cost {
            return Err(format!(
                "category totals {} do not match total cost {}",
                category_total, info.total_cost
            ));
        }

        let purchases: Money = self.pending_purchases.iter().map(|p| p.amount).sum();
        if purchases.truncated() != info.total_pending_purchases {
            return Err(format!(
                "pending purchases {} do not match total {}",
                purchases, info.total_pending_purchases
            ));
        }

        // Each total is truncated separately, so the sum may be off by one unit
        let drift = info.total_project_cost - (info.total_cost + info.total_not_yet_paid);
        if drift.abs() > Money::from_units(1) {
            return Err(format!(
                "project cost {} differs from total cost plus not yet paid",
                info.total_project_cost
            ));
        }

        if NaiveDateTime::parse_from_str(&self.last_updated, TIMESTAMP_FORMAT).is_err() {
            return Err(format!("unreadable last_updated '{}'", self.last_updated));
        }

        Ok(())
    }
}

/// Write the dashboard document as JSON
pub fn export_dashboard_json<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> CostResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| CostError::Export(e.to_string()))?;

    Ok(())
}

/// Read a dashboard document back and check it
pub fn import_dashboard_json(json_str: &str) -> CostResult<DashboardExport> {
    let export: DashboardExport = serde_json::from_str(json_str)?;
    export.validate().map_err(CostError::Validation)?;
    Ok(export)
}
