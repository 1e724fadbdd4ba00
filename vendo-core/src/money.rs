use serde::{Deserialize, Serialize};

/// Monetary amount in minor currency units (e.g., won or cents).
///
/// Never negative: construction rejects negative input and `checked_sub`
/// refuses to cross zero, so a balance built from these operations cannot
/// go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create a monetary amount, rejecting negative input.
    pub fn new(amount: i64) -> Result<Self, MoneyError> {
        if amount < 0 {
            return Err(MoneyError::InvalidAmount(amount));
        }
        Ok(Money(amount))
    }

    /// Infallible constructor for amounts that cannot be negative.
    pub const fn from_minor(amount: u32) -> Self {
        Money(amount as i64)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// None when the subtraction would go negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).filter(|a| *a >= 0).map(Money)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(Money::new(-500), Err(MoneyError::InvalidAmount(-500)));
        assert_eq!(Money::new(0), Ok(Money::ZERO));
        assert_eq!(Money::new(700).unwrap().amount(), 700);
    }

    #[test]
    fn test_checked_sub_refuses_to_go_negative() {
        let balance = Money::new(300).unwrap();
        let price = Money::new(700).unwrap();

        assert_eq!(balance.checked_sub(price), None);
        assert_eq!(price.checked_sub(balance), Some(Money::new(400).unwrap()));
        assert_eq!(price.checked_sub(price), Some(Money::ZERO));
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(1000).unwrap();
        let b = Money::new(234).unwrap();
        assert_eq!(a.checked_add(b), Some(Money::new(1234).unwrap()));
        assert_eq!(Money::new(i64::MAX).unwrap().checked_add(a), None);
    }

    #[test]
    fn test_ordering_matches_amounts() {
        assert!(Money::new(650).unwrap() < Money::new(700).unwrap());
        assert!(Money::new(700).unwrap() <= Money::new(700).unwrap());
    }
}
