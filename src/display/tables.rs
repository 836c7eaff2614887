//! Table rendering for terminal output
//!
//! Builds `tabled` tables for category breakdowns, pending items and the fee
//! schedule.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::{format_bar, format_percentage, truncate};
use crate::models::{Expense, FeeSchedule, Money, OutstandingBalance, PendingPurchaseItem};
use crate::services::CategorySummaryRow;

const DESCRIPTION_WIDTH: usize = 48;
const BAR_WIDTH: usize = 12;

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Fees")]
    fees: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "% Budget")]
    percentage: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct PurchaseLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct BalanceLine {
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Due")]
    due_date: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct UnpaidLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct FeeLine {
    #[tabled(rename = "Amount")]
    range: String,
    #[tabled(rename = "Fee")]
    fee: String,
}

fn render<T: Tabled>(rows: Vec<T>, numeric_from: usize) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(numeric_from..), Alignment::right());
    table.to_string()
}

/// Category breakdown with a share-of-budget bar
pub fn format_category_table(rows: &[CategorySummaryRow]) -> String {
    let max = rows
        .iter()
        .map(|r| r.budget_percentage)
        .fold(0.0_f64, f64::max);

    let lines: Vec<CategoryLine> = rows
        .iter()
        .map(|row| CategoryLine {
            category: row.category.clone(),
            amount: row.amount.to_string(),
            fees: row.mpesa_fee.to_string(),
            total: row.total_cost.to_string(),
            percentage: format_percentage(row.budget_percentage),
            bar: format_bar(row.budget_percentage, max, BAR_WIDTH),
        })
        .collect();

    render(lines, 1)
}

/// Pending purchases, contingency row included
pub fn format_purchase_table(items: &[PendingPurchaseItem]) -> String {
    let lines: Vec<PurchaseLine> = items
        .iter()
        .map(|item| PurchaseLine {
            category: item.category.clone(),
            description: truncate(&item.description, DESCRIPTION_WIDTH),
            amount: item.amount.to_string(),
        })
        .collect();

    render(lines, 2)
}

/// Outstanding vendor balances, settled ones included
pub fn format_balance_table(balances: &[OutstandingBalance]) -> String {
    let lines: Vec<BalanceLine> = balances
        .iter()
        .map(|balance| BalanceLine {
            vendor: balance.vendor.clone(),
            description: truncate(&balance.description, DESCRIPTION_WIDTH),
            due_date: balance.due_date.clone(),
            amount: balance.amount.to_string(),
        })
        .collect();

    render(lines, 3)
}

/// Unpaid expenses with their owed amounts
pub fn format_unpaid_table(expenses: &[Expense]) -> String {
    let lines: Vec<UnpaidLine> = expenses
        .iter()
        .map(|expense| UnpaidLine {
            date: expense.date.clone(),
            vendor: expense.vendor.clone(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            amount: expense.amount.to_string(),
        })
        .collect();

    render(lines, 3)
}

/// The fee schedule as amount ranges
pub fn format_fee_table(schedule: &FeeSchedule) -> String {
    let mut lower: Option<Money> = None;
    let lines: Vec<FeeLine> = schedule
        .tiers()
        .iter()
        .map(|tier| {
            let range = match (lower, tier.up_to) {
                (None, Some(upper)) => format!("0 - {}", upper),
                (Some(low), Some(upper)) => format!("over {} up to {}", low, upper),
                (Some(low), None) => format!("over {}", low),
                (None, None) => "any amount".to_string(),
            };
            lower = tier.up_to;
            FeeLine {
                range,
                fee: tier.fee.to_string(),
            }
        })
        .collect();

    render(lines, 1)
}
