use crate::error::{MercanetError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// A positive amount in minor currency units (cents).
///
/// The gateway only understands integer minor units, so `EUR 12.34` is
/// carried as `1234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    pub fn new(cents: i64) -> Result<Self> {
        if cents > 0 {
            Ok(Self(cents))
        } else {
            Err(MercanetError::validation(
                "amount",
                "amount must be a positive number of cents",
            ))
        }
    }

    /// Converts an order total in major units, rounding half away from zero.
    pub fn from_major_units(total: Decimal) -> Result<Self> {
        let cents = (total * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or_else(|| MercanetError::validation("amount", "amount out of range"))?;
        Self::new(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = MercanetError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = MercanetError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::from_major_units(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(1).is_ok());
        assert!(matches!(
            Amount::new(0),
            Err(MercanetError::ValidationError { .. })
        ));
        assert!(matches!(
            Amount::new(-5),
            Err(MercanetError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_from_major_units() {
        assert_eq!(Amount::from_major_units(dec!(12.34)).unwrap().cents(), 1234);
        assert_eq!(Amount::from_major_units(dec!(10)).unwrap().cents(), 1000);
        assert_eq!(Amount::from_major_units(dec!(0.125)).unwrap().cents(), 13);
        assert_eq!(Amount::from_major_units(dec!(0.005)).unwrap().cents(), 1);
        assert!(Amount::from_major_units(dec!(0.004)).is_err());
        assert!(Amount::from_major_units(dec!(-1.00)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(1234).unwrap().to_string(), "1234");
    }
}
