//! Console rendering of the project report
//!
//! Produces the plain-text summary printed by `buildcost report`.

use clap::ValueEnum;

use super::project::ProjectReport;
use crate::config::Settings;
use crate::display::report::{
    double_separator, format_money_signed, format_percentage, labelled, section_header, separator,
};
use crate::display::tables::{
    format_balance_table, format_category_table, format_purchase_table, format_unpaid_table,
};

const LABEL_WIDTH: usize = 42;
const RULE_WIDTH: usize = 60;

/// Which part of the report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportSection {
    /// Paid spending against the budget
    Summary,
    /// Paid spending by category
    Categories,
    /// Outstanding balances, unpaid labor and pending purchases
    Pending,
    /// Projected completion cost and funding gap
    Estimate,
    /// Everything
    #[default]
    All,
}

impl ReportSection {
    fn includes(self, section: ReportSection) -> bool {
        self == ReportSection::All || self == section
    }
}

/// Renders a report with the project's currency and naming
pub struct ConsoleReport<'a> {
    report: &'a ProjectReport,
    settings: &'a Settings,
    color: bool,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(report: &'a ProjectReport, settings: &'a Settings) -> Self {
        Self {
            report,
            settings,
            color: false,
        }
    }

    /// Highlight negative balances with ANSI colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Format the requested sections for terminal display
    pub fn format(&self, section: ReportSection) -> String {
        let mut parts = Vec::new();

        if section.includes(ReportSection::Summary) {
            parts.push(self.summary());
        }
        if section.includes(ReportSection::Categories) {
            parts.push(self.categories());
        }
        if section.includes(ReportSection::Pending) {
            parts.push(self.pending());
        }
        if section.includes(ReportSection::Estimate) {
            parts.push(self.estimate());
        }

        parts.join("\n")
    }

    fn money(&self, amount: crate::models::Money) -> String {
        format_money_signed(amount, &self.settings.currency_symbol, self.color)
    }

    fn line(&self, out: &mut String, label: &str, value: String) {
        out.push_str(&labelled(label, &value, LABEL_WIDTH));
        out.push('\n');
    }

    fn summary(&self) -> String {
        let summary = &self.report.summary;
        let totals = &self.report.totals;
        let pending = &self.report.pending;
        let mut out = String::new();

        out.push_str(&section_header(&format!(
            "{} expense summary",
            self.settings.project_name
        )));
        out.push('\n');
        if let Some(start) = self.settings.format_start_date() {
            self.line(&mut out, "Project Start", start);
        }
        self.line(&mut out, "Total Budget", self.money(self.report.total_budget));
        self.line(&mut out, "Total Spent (Paid)", self.money(summary.total_spent));
        self.line(&mut out, "M-Pesa Fees", self.money(summary.total_mpesa_fees));
        self.line(&mut out, "Total Cost (inc. fees)", self.money(summary.total_cost));
        self.line(&mut out, "Balance Remaining", self.money(summary.balance_remaining));
        self.line(
            &mut out,
            "Budget Used (Paid Only)",
            format_percentage(summary.percentage_used),
        );
        if summary.is_over_budget() {
            self.line(&mut out, "Status", "OVER BUDGET (paid spending)".to_string());
        }
        out.push('\n');

        out.push_str(&section_header("Outstanding amounts"));
        out.push('\n');
        self.line(&mut out, "Outstanding Balances", self.money(pending.total_outstanding));
        self.line(&mut out, "Unpaid Labor", self.money(pending.total_unpaid_labor));
        self.line(&mut out, "Total Pending", self.money(pending.total_pending));
        self.line(
            &mut out,
            "Total Committed (Paid + Pending)",
            self.money(totals.total_committed),
        );
        self.line(
            &mut out,
            "Budget Used (Inclusive)",
            format_percentage(totals.percentage_used_inclusive),
        );
        self.line(&mut out, "Effective Balance", self.money(totals.effective_balance));

        out
    }

    fn categories(&self) -> String {
        let mut out = section_header("Category breakdown");
        out.push('\n');

        if self.report.categories.is_empty() {
            out.push_str("No paid expenses yet.\n");
        } else {
            out.push_str(&format_category_table(&self.report.categories));
            out.push('\n');
        }

        out
    }

    fn pending(&self) -> String {
        let pending = &self.report.pending;
        let totals = &self.report.totals;
        let mut out = String::new();

        out.push_str(&section_header("Outstanding balances (specialist work)"));
        out.push('\n');
        if self.report.outstanding_balances.is_empty() {
            out.push_str("None recorded.\n");
        } else {
            out.push_str(&format_balance_table(&self.report.outstanding_balances));
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&section_header("Unpaid labor"));
        out.push('\n');
        if pending.unpaid_expenses.is_empty() {
            out.push_str("None recorded.\n");
        } else {
            out.push_str(&format_unpaid_table(&pending.unpaid_expenses));
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&section_header("Pending purchases (not yet procured)"));
        out.push('\n');
        out.push_str(&format_purchase_table(&pending.pending_purchases_with_contingency));
        out.push('\n');
        self.line(
            &mut out,
            "Total Pending Purchases",
            self.money(pending.total_pending_purchases_with_contingency),
        );
        out.push('\n');

        out.push_str(&section_header("Pending items (not yet paid/bought)"));
        out.push('\n');
        self.line(
            &mut out,
            "Outstanding Balances (Specialist Work)",
            self.money(pending.total_outstanding),
        );
        self.line(
            &mut out,
            "Unpaid Labor (Daily Workers)",
            self.money(pending.total_unpaid_labor),
        );
        self.line(
            &mut out,
            "Pending Purchases (Items to Buy)",
            self.money(pending.total_pending_purchases_with_contingency),
        );
        out.push_str(&separator(RULE_WIDTH));
        out.push('\n');
        self.line(
            &mut out,
            "TOTAL PENDING (Not Yet Paid/Bought)",
            self.money(totals.total_not_yet_paid),
        );

        out
    }

    fn estimate(&self) -> String {
        let summary = &self.report.summary;
        let pending = &self.report.pending;
        let totals = &self.report.totals;
        let mut out = String::new();

        out.push_str(&section_header("Project completion estimate"));
        out.push('\n');
        self.line(&mut out, "1. Already Spent (Paid)", self.money(summary.total_cost));
        self.line(&mut out, "2. Outstanding Balances", self.money(pending.total_outstanding));
        self.line(&mut out, "3. Unpaid Labor", self.money(pending.total_unpaid_labor));
        self.line(
            &mut out,
            "4. Pending Purchases",
            self.money(pending.total_pending_purchases_with_contingency),
        );
        self.line(
            &mut out,
            "   - Items to buy",
            self.money(pending.total_pending_purchases),
        );
        self.line(
            &mut out,
            &format!("   - Contingency ({}%)", self.settings.contingency_percent),
            self.money(pending.miscellaneous_estimate),
        );
        out.push_str(&double_separator(RULE_WIDTH));
        out.push('\n');
        self.line(
            &mut out,
            "TOTAL ESTIMATED PROJECT COST",
            self.money(totals.total_project_cost),
        );
        self.line(&mut out, "Current Budget", self.money(self.report.total_budget));
        self.line(
            &mut out,
            "Already Over Budget (Spent)",
            self.money(totals.spent_over_budget),
        );
        out.push('\n');

        let gap_label = if totals.needs_more_funds() {
            "ADDITIONAL FUNDS NEEDED"
        } else {
            "PROJECTED SURPLUS"
        };
        let gap = if totals.needs_more_funds() {
            totals.additional_funds_needed
        } else {
            -totals.additional_funds_needed
        };
        self.line(&mut out, gap_label, self.money(gap));
        self.line(
            &mut out,
            "Total Over Budget",
            format_percentage(totals.overrun_percentage),
        );
        out.push_str(&double_separator(RULE_WIDTH));
        out.push('\n');

        out
    }
}
