//! Transaction fee schedule
//!
//! A tiered lookup from payment amount to the M-Pesa transaction fee. Each tier
//! covers amounts up to and including its upper bound; the final tier has no
//! bound and caps the fee.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{CostError, CostResult};

/// One bracket of the fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Inclusive upper bound of the bracket; `None` for the open-ended top tier
    pub up_to: Option<Money>,
    /// Fee charged for amounts in this bracket
    pub fee: Money,
}

impl FeeTier {
    const fn bounded(up_to: i64, fee_cents: i64) -> Self {
        Self {
            up_to: Some(Money::from_units(up_to)),
            fee: Money::from_cents(fee_cents),
        }
    }
}

/// Tiered transaction fee schedule
///
/// Deserializes from a plain list of tiers and rejects malformed lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeeTier>", into = "Vec<FeeTier>")]
pub struct FeeSchedule {
    tiers: Vec<FeeTier>,
}

impl TryFrom<Vec<FeeTier>> for FeeSchedule {
    type Error = CostError;

    fn try_from(tiers: Vec<FeeTier>) -> CostResult<Self> {
        Self::from_tiers(tiers)
    }
}

impl From<FeeSchedule> for Vec<FeeTier> {
    fn from(schedule: FeeSchedule) -> Self {
        schedule.tiers
    }
}

impl FeeSchedule {
    /// The M-Pesa send-money schedule
    ///
    /// Amounts above 50,000 stay at the 455 cap.
    pub fn mpesa() -> Self {
        Self {
            tiers: vec![
                FeeTier::bounded(49, 0),
                FeeTier::bounded(100, 100),
                FeeTier::bounded(500, 500),
                FeeTier::bounded(1_000, 1_000),
                FeeTier::bounded(1_500, 1_500),
                FeeTier::bounded(3_000, 2_500),
                FeeTier::bounded(5_000, 4_000),
                FeeTier::bounded(7_500, 7_500),
                FeeTier::bounded(10_000, 9_600),
                FeeTier::bounded(15_000, 15_600),
                FeeTier::bounded(20_000, 17_150),
                FeeTier::bounded(35_000, 35_500),
                FeeTier::bounded(50_000, 45_500),
                FeeTier {
                    up_to: None,
                    fee: Money::from_units(455),
                },
            ],
        }
    }

    /// Build a schedule from explicit tiers, checking that it is well formed
    pub fn from_tiers(tiers: Vec<FeeTier>) -> CostResult<Self> {
        let schedule = Self { tiers };
        schedule.validate()?;
        Ok(schedule)
    }

    /// All tiers in ascending order
    pub fn tiers(&self) -> &[FeeTier] {
        &self.tiers
    }

    /// Look up the fee for a payment amount
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative amounts.
    pub fn fee(&self, amount: Money) -> CostResult<Money> {
        if amount.is_negative() {
            return Err(CostError::Validation(format!(
                "Cannot compute a fee for negative amount {}",
                amount
            )));
        }

        let tier = self
            .tiers
            .iter()
            .find(|tier| tier.up_to.map_or(true, |bound| amount <= bound))
            .ok_or_else(|| {
                CostError::Config(format!("Fee schedule has no tier covering {}", amount))
            })?;

        Ok(tier.fee)
    }

    /// Check bounds ascend strictly, fees are non-negative, and only the last tier is open
    pub fn validate(&self) -> CostResult<()> {
        let Some(last) = self.tiers.last() else {
            return Err(CostError::Config("Fee schedule has no tiers".into()));
        };
        if last.up_to.is_some() {
            return Err(CostError::Config(
                "Fee schedule must end with an open-ended tier".into(),
            ));
        }

        let mut previous: Option<Money> = None;
        for (i, tier) in self.tiers.iter().enumerate() {
            if tier.fee.is_negative() {
                return Err(CostError::Config(format!(
                    "Fee schedule tier {} has a negative fee",
                    i + 1
                )));
            }
            if i + 1 == self.tiers.len() {
                break;
            }
            let Some(bound) = tier.up_to else {
                return Err(CostError::Config(format!(
                    "Fee schedule tier {} is open-ended but is not the last tier",
                    i + 1
                )));
            };
            if bound.is_negative() || previous.is_some_and(|p| bound <= p) {
                return Err(CostError::Config(format!(
                    "Fee schedule tier {} bound {} is not above the previous tier",
                    i + 1,
                    bound
                )));
            }
            previous = Some(bound);
        }

        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::mpesa()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee(units: i64) -> Money {
        FeeSchedule::mpesa().fee(Money::from_units(units)).unwrap()
    }

    #[test]
    fn test_zero_amount_is_free() {
        assert_eq!(fee(0), Money::zero());
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(fee(49), Money::zero());
        assert_eq!(fee(50), Money::from_units(1));
        assert_eq!(fee(100), Money::from_units(1));
        assert_eq!(fee(101), Money::from_units(5));
        assert_eq!(fee(2000), Money::from_units(25));
        assert_eq!(fee(20_000), Money::from_cents(17150));
        assert_eq!(fee(20_001), Money::from_units(355));
        assert_eq!(fee(50_000), Money::from_units(455));
    }

    #[test]
    fn test_fractional_amount_between_tiers() {
        let schedule = FeeSchedule::mpesa();
        assert_eq!(
            schedule.fee(Money::from_cents(4950)).unwrap(),
            Money::from_units(1)
        );
    }

    #[test]
    fn test_cap_above_fifty_thousand() {
        for units in [50_001, 75_000, 100_000, 1_000_000] {
            assert_eq!(fee(units), Money::from_units(455));
        }
    }

    #[test]
    fn test_monotonic() {
        let schedule = FeeSchedule::mpesa();
        let mut previous = Money::zero();
        for units in (0..=60_000).step_by(7) {
            let current = schedule.fee(Money::from_units(units)).unwrap();
            assert!(current >= previous, "fee dropped at {}", units);
            previous = current;
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = FeeSchedule::mpesa().fee(Money::from_units(-1)).unwrap_err();
        assert!(matches!(err, CostError::Validation(_)));
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(FeeSchedule::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unordered_tiers() {
        let result = FeeSchedule::from_tiers(vec![
            FeeTier::bounded(100, 100),
            FeeTier::bounded(50, 200),
            FeeTier {
                up_to: None,
                fee: Money::from_units(3),
            },
        ]);
        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_rejects_missing_open_tier() {
        let result = FeeSchedule::from_tiers(vec![FeeTier::bounded(100, 100)]);
        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FeeSchedule::mpesa()).unwrap();
        assert!(json.contains(r#"{"up_to":20000,"fee":171.5}"#));
        assert!(json.ends_with(r#"{"up_to":null,"fee":455}]"#));

        let back: FeeSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FeeSchedule::mpesa());
    }

    #[test]
    fn test_deserialize_rejects_malformed_tiers() {
        let json = r#"[{"up_to": 500, "fee": 5}, {"up_to": 100, "fee": 1}, {"up_to": null, "fee": 10}]"#;
        let err = serde_json::from_str::<FeeSchedule>(json).unwrap_err();
        assert!(err.to_string().contains("not above the previous tier"));
    }
}
