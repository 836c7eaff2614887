//! Project cost report
//!
//! Runs the full calculation pipeline over a project's source records: annotate
//! expenses, summarize paid spending, break it down by category, total pending
//! work, and roll everything up into the projected completion cost.

use crate::config::Settings;
use crate::error::{CostError, CostResult};
use crate::models::{Expense, Money, OutstandingBalance};
use crate::services::{
    CategoryAggregator, CategorySummaryRow, ExpenseProcessor, PendingAmounts, PendingCalculator,
    ProjectTotals, SummaryAggregator, SummaryStats,
};
use crate::storage::ProjectData;

/// Everything computed for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    /// All expenses, annotated, in source order
    pub expenses: Vec<Expense>,
    pub summary: SummaryStats,
    pub categories: Vec<CategorySummaryRow>,
    pub pending: PendingAmounts,
    pub totals: ProjectTotals,
    /// Outstanding balances as supplied, including settled ones
    pub outstanding_balances: Vec<OutstandingBalance>,
    /// Budget the report was computed against
    pub total_budget: Money,
}

impl ProjectReport {
    /// Generate the report and check its arithmetic
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unusable settings, an input error for
    /// a record the fee schedule rejects, and an invariant error if the
    /// aggregates disagree with each other.
    pub fn generate(settings: &Settings, data: &ProjectData) -> CostResult<Self> {
        settings.validate()?;

        let expenses = ExpenseProcessor::new(settings).process(&data.expenses)?;
        let summary = SummaryAggregator::new(settings).summarize(&expenses);
        let categories = CategoryAggregator::new(settings).by_category(&expenses);
        let pending = PendingCalculator::new(settings).pending(
            &expenses,
            &data.outstanding_balances,
            &data.pending_purchases,
        );
        let totals = ProjectTotals::compute(&summary, &pending, settings);

        let report = Self {
            expenses,
            summary,
            categories,
            pending,
            totals,
            outstanding_balances: data.outstanding_balances.clone(),
            total_budget: settings.total_budget,
        };
        report.verify()?;

        tracing::info!(
            total_cost = %report.summary.total_cost,
            project_cost = %report.totals.total_project_cost,
            "generated project report"
        );

        Ok(report)
    }

    /// Check that the aggregates are consistent with each other
    pub fn verify(&self) -> CostResult<()> {
        for (i, expense) in self.expenses.iter().enumerate() {
            let expected = if expense.is_paid() {
                expense.amount + expense.mpesa_fee
            } else {
                Money::zero()
            };
            if expense.total_cost != expected {
                return Err(CostError::Invariant(format!(
                    "expense #{} total cost {} should be {}",
                    i + 1,
                    expense.total_cost,
                    expected
                )));
            }
        }

        let summary = &self.summary;
        if summary.total_cost != summary.total_spent + summary.total_mpesa_fees {
            return Err(CostError::Invariant(format!(
                "total cost {} differs from spent {} plus fees {}",
                summary.total_cost, summary.total_spent, summary.total_mpesa_fees
            )));
        }

        let category_total: Money = self.categories.iter().map(|c| c.total_cost).sum();
        if category_total != summary.total_cost {
            return Err(CostError::Invariant(format!(
                "category totals {} differ from paid total {}",
                category_total, summary.total_cost
            )));
        }

        let pending = &self.pending;
        let contingency_rows = pending
            .pending_purchases_with_contingency
            .iter()
            .filter(|p| p.is_contingency())
            .count();
        let with_contingency: Money = pending
            .pending_purchases_with_contingency
            .iter()
            .map(|p| p.amount)
            .sum();
        if contingency_rows == 0 || with_contingency != pending.total_pending_purchases_with_contingency {
            return Err(CostError::Invariant(format!(
                "pending purchases {} do not match total with contingency {}",
                with_contingency, pending.total_pending_purchases_with_contingency
            )));
        }

        let totals = &self.totals;
        if totals.total_project_cost != summary.total_cost + totals.total_not_yet_paid {
            return Err(CostError::Invariant(format!(
                "project cost {} differs from paid {} plus not yet paid {}",
                totals.total_project_cost, summary.total_cost, totals.total_not_yet_paid
            )));
        }

        Ok(())
    }

    /// Number of unpaid expenses
    pub fn unpaid_count(&self) -> usize {
        self.pending.unpaid_expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PendingPurchaseItem, RawExpense};

    fn project_data() -> ProjectData {
        ProjectData {
            expenses: vec![
                RawExpense::new("15/09/2025", "Materials", "Cement", Money::from_units(7_500)),
                RawExpense::new("16/09/2025", "Labor", "Fundi wages UNPAID", Money::from_units(5_000)),
                RawExpense::new("18/09/2025", "Plumbing", "Pipes", Money::from_units(18_000)),
                RawExpense::new("20/09/2025", "Materials", "Sand", Money::from_units(3_000)),
            ],
            outstanding_balances: vec![
                OutstandingBalance::new("Electrician", "Fully paid", Money::zero(), "Completed"),
                OutstandingBalance::new("Plumber", "Balance", Money::from_units(12_000), "To be scheduled"),
            ],
            pending_purchases: vec![
                PendingPurchaseItem::new("Paint", "20 ltrs silk Ivory", Money::from_units(14_700)),
                PendingPurchaseItem::new("Construction Work", "Veranda", Money::from_units(30_000)),
            ],
        }
    }

    #[test]
    fn test_end_to_end_single_expense() {
        let settings = Settings::with_budget(Money::from_units(1_000_000));
        let data = ProjectData {
            expenses: vec![RawExpense::new("15/09/2025", "X", "Cement", Money::from_units(2000))],
            ..Default::default()
        };

        let report = ProjectReport::generate(&settings, &data).unwrap();
        assert_eq!(report.summary.total_spent, Money::from_units(2000));
        assert_eq!(report.summary.total_mpesa_fees, Money::from_units(25));
        assert_eq!(report.summary.total_cost, Money::from_units(2025));
        assert_eq!(report.summary.balance_remaining, Money::from_units(997_975));
        assert_eq!(report.summary.percentage_used, 0.2025);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "X");
        assert_eq!(report.categories[0].budget_percentage, 0.2025);
    }

    #[test]
    fn test_full_project() {
        let settings = Settings::default();
        let report = ProjectReport::generate(&settings, &project_data()).unwrap();

        // 7,575 + 18,171.50 + 3,025
        assert_eq!(report.summary.total_cost, Money::from_cents(2_877_150));
        assert_eq!(report.pending.total_unpaid_labor, Money::from_units(5_000));
        assert_eq!(report.pending.total_outstanding, Money::from_units(12_000));
        assert_eq!(report.pending.total_pending, Money::from_units(17_000));
        // floor(0.15 * (44,700 + 12,000 + 5,000)) = 9,255
        assert_eq!(report.pending.miscellaneous_estimate, Money::from_units(9_255));
        assert_eq!(
            report.pending.total_pending_purchases_with_contingency,
            Money::from_units(53_955)
        );
        assert_eq!(report.totals.total_not_yet_paid, Money::from_units(70_955));
        assert_eq!(
            report.totals.total_project_cost,
            Money::from_cents(2_877_150 + 7_095_500)
        );
        assert_eq!(report.unpaid_count(), 1);
        assert_eq!(report.outstanding_balances.len(), 2);

        let names: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Plumbing", "Materials"]);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let settings = Settings::default();
        let first = ProjectReport::generate(&settings, &project_data()).unwrap();
        let second = ProjectReport::generate(&settings, &project_data()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.categories).unwrap(),
            serde_json::to_string(&second.categories).unwrap()
        );
    }

    #[test]
    fn test_rejects_non_positive_budget() {
        let settings = Settings::with_budget(Money::zero());
        let err = ProjectReport::generate(&settings, &project_data()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_verify_catches_tampered_category() {
        let settings = Settings::default();
        let mut report = ProjectReport::generate(&settings, &project_data()).unwrap();
        report.categories[0].total_cost += Money::from_units(1);

        assert!(matches!(report.verify(), Err(CostError::Invariant(_))));
    }

    #[test]
    fn test_verify_catches_charged_unpaid_expense() {
        let settings = Settings::default();
        let mut report = ProjectReport::generate(&settings, &project_data()).unwrap();
        let unpaid = report.expenses.iter_mut().find(|e| !e.is_paid()).unwrap();
        unpaid.total_cost = unpaid.amount;

        let err = report.verify().unwrap_err();
        assert!(err.to_string().contains("expense #2"));
    }

    #[test]
    fn test_largest_amounts_do_not_overflow() {
        let settings = Settings::with_budget(Money::MAX);
        let data = ProjectData {
            expenses: vec![
                RawExpense::new("15/09/2025", "Materials", "Steel", Money::MAX),
                RawExpense::new("16/09/2025", "Labor", "Crew UNPAID", Money::MAX),
            ],
            outstanding_balances: vec![OutstandingBalance::new("Contractor", "Shell", Money::MAX, "Later")],
            pending_purchases: vec![PendingPurchaseItem::new("Roofing", "Sheets", Money::MAX)],
        };

        let report = ProjectReport::generate(&settings, &data).unwrap();
        assert_eq!(report.summary.total_cost, Money::MAX + Money::from_units(455));
        assert_eq!(report.pending.miscellaneous_estimate, Money::from_units(45_000_000_000));
        assert!(report.totals.needs_more_funds());
    }

    #[test]
    fn test_empty_project() {
        let settings = Settings::default();
        let report = ProjectReport::generate(&settings, &ProjectData::default()).unwrap();

        assert_eq!(report.summary.total_cost, Money::zero());
        assert!(report.categories.is_empty());
        assert_eq!(report.totals.total_project_cost, Money::zero());
        assert_eq!(report.totals.additional_funds_needed, -settings.total_budget);
    }
}
