//! Paid-expense summary
//!
//! Totals over paid expenses only: what has actually left the account so far.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Spending to date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of paid amounts, before fees
    pub total_spent: Money,
    /// Sum of fees on paid expenses
    pub total_mpesa_fees: Money,
    /// Paid amounts plus fees
    pub total_cost: Money,
    /// Budget minus total cost; negative once over budget
    pub balance_remaining: Money,
    /// Total cost as a percentage of the budget (may exceed 100)
    pub percentage_used: f64,
    /// Number of paid expenses
    pub paid_count: usize,
}

impl SummaryStats {
    pub fn is_over_budget(&self) -> bool {
        self.balance_remaining.is_negative()
    }
}

/// Aggregates paid expenses against the budget
pub struct SummaryAggregator<'a> {
    settings: &'a Settings,
}

impl<'a> SummaryAggregator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Summarize paid expenses; unpaid ones are ignored
    pub fn summarize(&self, expenses: &[Expense]) -> SummaryStats {
        let total_budget = self.settings.total_budget;

        let mut total_spent = Money::zero();
        let mut total_mpesa_fees = Money::zero();
        let mut total_cost = Money::zero();
        let mut paid_count = 0;

        for expense in expenses.iter().filter(|e| e.is_paid()) {
            total_spent += expense.amount;
            total_mpesa_fees += expense.mpesa_fee;
            total_cost += expense.total_cost;
            paid_count += 1;
        }

        let stats = SummaryStats {
            total_spent,
            total_mpesa_fees,
            total_cost,
            balance_remaining: total_budget - total_cost,
            percentage_used: total_cost.percentage_of(total_budget),
            paid_count,
        };

        tracing::debug!(
            paid = stats.paid_count,
            total_cost = %stats.total_cost,
            "summarized paid expenses"
        );

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawExpense;
    use crate::services::ExpenseProcessor;

    fn expenses(settings: &Settings, items: &[(&str, i64)]) -> Vec<Expense> {
        let raw: Vec<_> = items
            .iter()
            .map(|(desc, units)| RawExpense::new("15/09/2025", "X", *desc, Money::from_units(*units)))
            .collect();
        ExpenseProcessor::new(settings).process(&raw).unwrap()
    }

    #[test]
    fn test_single_paid_expense() {
        let settings = Settings::with_budget(Money::from_units(1_000_000));
        let stats = SummaryAggregator::new(&settings).summarize(&expenses(&settings, &[("Cement", 2000)]));

        assert_eq!(stats.total_spent, Money::from_units(2000));
        assert_eq!(stats.total_mpesa_fees, Money::from_units(25));
        assert_eq!(stats.total_cost, Money::from_units(2025));
        assert_eq!(stats.balance_remaining, Money::from_units(997_975));
        assert_eq!(stats.percentage_used, 0.2025);
        assert_eq!(stats.paid_count, 1);
    }

    #[test]
    fn test_unpaid_excluded() {
        let settings = Settings::default();
        let stats = SummaryAggregator::new(&settings)
            .summarize(&expenses(&settings, &[("Sand", 3000), ("Labor UNPAID", 5000)]));

        assert_eq!(stats.total_spent, Money::from_units(3000));
        assert_eq!(stats.total_cost, Money::from_units(3025));
        assert_eq!(stats.paid_count, 1);
    }

    #[test]
    fn test_total_cost_is_spent_plus_fees() {
        let settings = Settings::default();
        let stats = SummaryAggregator::new(&settings).summarize(&expenses(
            &settings,
            &[("Timber", 18_000), ("Tiles", 42_000), ("Nails", 49), ("Paint", 7_500)],
        ));

        assert_eq!(stats.total_cost, stats.total_spent + stats.total_mpesa_fees);
        assert_eq!(stats.total_mpesa_fees, Money::from_cents(17150 + 45500 + 7500));
    }

    #[test]
    fn test_over_budget_goes_negative() {
        let settings = Settings::with_budget(Money::from_units(10_000));
        let stats = SummaryAggregator::new(&settings)
            .summarize(&expenses(&settings, &[("Roofing", 12_000)]));

        assert!(stats.is_over_budget());
        assert_eq!(stats.balance_remaining, Money::from_units(-2_156));
        assert!(stats.percentage_used > 100.0);
    }

    #[test]
    fn test_empty_expenses() {
        let settings = Settings::default();
        let stats = SummaryAggregator::new(&settings).summarize(&[]);
        assert_eq!(stats.total_cost, Money::zero());
        assert_eq!(stats.balance_remaining, settings.total_budget);
        assert_eq!(stats.percentage_used, 0.0);
    }
}
