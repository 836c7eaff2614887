//! Expense processing
//!
//! Annotates raw expense records with their transaction fee, total cost and
//! payment status.

use crate::config::Settings;
use crate::error::{CostError, CostResult};
use crate::models::{Expense, ExpenseStatus, RawExpense};

/// Turns raw expense records into annotated expenses
pub struct ExpenseProcessor<'a> {
    settings: &'a Settings,
}

impl<'a> ExpenseProcessor<'a> {
    /// Create a new expense processor
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Annotate every record, preserving input order
    ///
    /// Records marked unpaid get a zero fee and zero total cost. Paid records
    /// are charged according to the fee schedule.
    pub fn process(&self, raw_expenses: &[RawExpense]) -> CostResult<Vec<Expense>> {
        let expenses = raw_expenses
            .iter()
            .enumerate()
            .map(|(i, raw)| self.process_one(raw).map_err(|e| with_record(i, e)))
            .collect::<CostResult<Vec<_>>>()?;

        let unpaid = expenses.iter().filter(|e| !e.is_paid()).count();
        tracing::debug!(
            records = expenses.len(),
            unpaid,
            "annotated expenses"
        );

        Ok(expenses)
    }

    /// Annotate a single record
    pub fn process_one(&self, raw: &RawExpense) -> CostResult<Expense> {
        match raw.resolve_status(&self.settings.unpaid_marker) {
            ExpenseStatus::Unpaid => Ok(Expense::unpaid(raw)),
            ExpenseStatus::Paid => {
                let fee = self.settings.fee_schedule.fee(raw.amount)?;
                Ok(Expense::paid(raw, fee))
            }
        }
    }
}

fn with_record(index: usize, err: CostError) -> CostError {
    match err {
        CostError::Validation(reason) => {
            CostError::bad_field(format!("expense #{}", index + 1), "amount", reason)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn raw(description: &str, units: i64) -> RawExpense {
        RawExpense::new("15/09/2025", "Materials", description, Money::from_units(units))
    }

    #[test]
    fn test_paid_expense_gets_fee() {
        let settings = Settings::default();
        let processor = ExpenseProcessor::new(&settings);

        let expense = processor.process_one(&raw("Cement", 2000)).unwrap();
        assert_eq!(expense.status, ExpenseStatus::Paid);
        assert_eq!(expense.mpesa_fee, Money::from_units(25));
        assert_eq!(expense.total_cost, Money::from_units(2025));
    }

    #[test]
    fn test_unpaid_marker_zeroes_cost() {
        let settings = Settings::default();
        let processor = ExpenseProcessor::new(&settings);

        let expense = processor
            .process_one(&raw("Fundi labor - UNPAID", 5000))
            .unwrap();
        assert_eq!(expense.status, ExpenseStatus::Unpaid);
        assert_eq!(expense.mpesa_fee, Money::zero());
        assert_eq!(expense.total_cost, Money::zero());
        assert_eq!(expense.amount, Money::from_units(5000));
    }

    #[test]
    fn test_custom_marker() {
        let mut settings = Settings::default();
        settings.unpaid_marker = "[owed]".into();
        let processor = ExpenseProcessor::new(&settings);

        assert!(!processor.process_one(&raw("Wages [owed]", 800)).unwrap().is_paid());
        assert!(processor.process_one(&raw("Wages UNPAID", 800)).unwrap().is_paid());
    }

    #[test]
    fn test_preserves_order_and_input() {
        let settings = Settings::default();
        let processor = ExpenseProcessor::new(&settings);
        let input = vec![raw("Sand", 3000), raw("Labor UNPAID", 1500), raw("Nails", 40)];
        let before = input.clone();

        let expenses = processor.process(&input).unwrap();
        let descriptions: Vec<_> = expenses.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Sand", "Labor UNPAID", "Nails"]);
        assert_eq!(input, before);
    }

    #[test]
    fn test_negative_amount_names_record() {
        let settings = Settings::default();
        let processor = ExpenseProcessor::new(&settings);
        let input = vec![raw("Sand", 3000), raw("Refund", -200)];

        let err = processor.process(&input).unwrap_err();
        assert!(err.is_input_shape());
        assert!(err.to_string().contains("expense #2"));
    }

    #[test]
    fn test_zero_amount_unpaid() {
        let settings = Settings::default();
        let processor = ExpenseProcessor::new(&settings);
        let expense = processor.process_one(&raw("UNPAID", 0)).unwrap();
        assert_eq!(expense.total_cost, Money::zero());
    }

    #[test]
    fn test_empty_input() {
        let settings = Settings::default();
        assert!(ExpenseProcessor::new(&settings).process(&[]).unwrap().is_empty());
    }
}
