//! CLI commands for the transfer fee schedule

use crate::config::Settings;
use crate::display::format_fee_table;
use crate::error::{CostError, CostResult};
use crate::models::Money;

/// Look up the fee for a single amount
pub fn fee_for(settings: &Settings, amount: &str) -> CostResult<(Money, Money)> {
    let amount = Money::parse(amount)
        .map_err(|e| CostError::Validation(format!("Invalid amount '{}': {}", amount, e)))?;
    let fee = settings.fee_schedule.fee(amount)?;
    Ok((amount, fee))
}

/// Handle `buildcost fee <amount>`
pub fn handle_fee_command(settings: &Settings, amount: &str) -> CostResult<()> {
    let (amount, fee) = fee_for(settings, amount)?;

    println!("Amount: {}", settings.format_money(amount));
    println!("Fee:    {}", settings.format_money(fee));
    println!("Total:  {}", settings.format_money(amount + fee));

    Ok(())
}

/// Handle `buildcost fees`
pub fn handle_fees_command(settings: &Settings) -> CostResult<()> {
    settings.fee_schedule.validate()?;

    println!("Transfer fees ({})", settings.currency_symbol);
    println!("{}", format_fee_table(&settings.fee_schedule));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_for() {
        let settings = Settings::default();
        let (amount, fee) = fee_for(&settings, "20,000").unwrap();
        assert_eq!(amount, Money::from_units(20_000));
        assert_eq!(fee, Money::from_cents(17150));
    }

    #[test]
    fn test_fee_for_negative_amount() {
        let err = fee_for(&Settings::default(), "-5").unwrap_err();
        assert!(matches!(err, CostError::Validation(_)));
    }
}
