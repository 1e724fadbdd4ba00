use serde::{Deserialize, Serialize};
use vendo_core::Money;

use crate::beverage::BeverageKind;

/// One purchasable group: all stocked beverages of a kind.
///
/// A derived view over the inventory, recomputed on demand and never
/// stored. `price` is the price of the beverage that would be vended next;
/// an empty pack falls back to the kind's default price for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pack {
    pub kind: BeverageKind,
    pub title: String,
    pub price: Money,
    pub count: u32,
}

impl Pack {
    /// Buyable means in stock and affordable with the given balance.
    pub fn is_buyable(&self, balance: Money) -> bool {
        self.count > 0 && self.price <= balance
    }

    pub fn description(&self) -> String {
        format!("{} ({})", self.title, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(count: u32, price: u32) -> Pack {
        Pack {
            kind: BeverageKind::ColaClassic,
            title: BeverageKind::ColaClassic.title().to_string(),
            price: Money::from_minor(price),
            count,
        }
    }

    #[test]
    fn test_buyable_needs_stock_and_balance() {
        assert!(pack(1, 700).is_buyable(Money::from_minor(700)));
        assert!(pack(1, 700).is_buyable(Money::from_minor(1000)));
        assert!(!pack(0, 700).is_buyable(Money::from_minor(1000)));
        assert!(!pack(1, 700).is_buyable(Money::from_minor(699)));
    }
}
