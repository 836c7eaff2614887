//! Category breakdown
//!
//! Groups paid expenses by category and ranks categories by their share of the
//! budget.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Paid totals for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummaryRow {
    pub category: String,
    pub amount: Money,
    pub mpesa_fee: Money,
    pub total_cost: Money,
    /// Category total cost as a percentage of the budget
    pub budget_percentage: f64,
    /// Number of paid expenses in the category
    #[serde(skip)]
    pub expense_count: usize,
}

impl CategorySummaryRow {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            amount: Money::zero(),
            mpesa_fee: Money::zero(),
            total_cost: Money::zero(),
            budget_percentage: 0.0,
            expense_count: 0,
        }
    }
}

/// Builds the per-category breakdown of paid expenses
pub struct CategoryAggregator<'a> {
    settings: &'a Settings,
}

impl<'a> CategoryAggregator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Per-category totals, largest share of the budget first
    ///
    /// Categories match on the exact string. Categories with equal shares keep
    /// the order in which they were first seen.
    pub fn by_category(&self, expenses: &[Expense]) -> Vec<CategorySummaryRow> {
        let mut rows: Vec<CategorySummaryRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in expenses.iter().filter(|e| e.is_paid()) {
            let slot = *index.entry(expense.category.as_str()).or_insert_with(|| {
                rows.push(CategorySummaryRow::new(&expense.category));
                rows.len() - 1
            });

            let row = &mut rows[slot];
            row.amount += expense.amount;
            row.mpesa_fee += expense.mpesa_fee;
            row.total_cost += expense.total_cost;
            row.expense_count += 1;
        }

        for row in &mut rows {
            row.budget_percentage = row.total_cost.percentage_of(self.settings.total_budget);
        }

        // Stable sort: ties keep first-seen order
        rows.sort_by(|a, b| b.budget_percentage.total_cmp(&a.budget_percentage));

        tracing::debug!(categories = rows.len(), "built category breakdown");
        rows
    }
}
