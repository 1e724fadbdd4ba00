use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vendo_core::Money;

/// Serving temperature classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Serving {
    Hot,
    Cold,
}

/// The closed set of beverages the machine can stock.
///
/// Declaration order is the canonical listing order; `Ord` derives from it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeverageKind {
    ColaClassic,
    CitrusSoda,
    MangoJuice,
    Americano,
    CaffeLatte,
    GreenTea,
}

impl BeverageKind {
    pub const ALL: [BeverageKind; 6] = [
        BeverageKind::ColaClassic,
        BeverageKind::CitrusSoda,
        BeverageKind::MangoJuice,
        BeverageKind::Americano,
        BeverageKind::CaffeLatte,
        BeverageKind::GreenTea,
    ];

    /// Resolve the manager's numeric selection to a kind.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            BeverageKind::ColaClassic => "Cola Classic",
            BeverageKind::CitrusSoda => "Citrus Soda",
            BeverageKind::MangoJuice => "Mango Juice",
            BeverageKind::Americano => "Americano",
            BeverageKind::CaffeLatte => "Caffe Latte",
            BeverageKind::GreenTea => "Green Tea",
        }
    }

    pub fn default_price(&self) -> Money {
        match self {
            BeverageKind::ColaClassic => Money::from_minor(700),
            BeverageKind::CitrusSoda => Money::from_minor(650),
            BeverageKind::MangoJuice => Money::from_minor(900),
            BeverageKind::Americano => Money::from_minor(1000),
            BeverageKind::CaffeLatte => Money::from_minor(1200),
            BeverageKind::GreenTea => Money::from_minor(800),
        }
    }

    pub fn serving(&self) -> Serving {
        match self {
            BeverageKind::ColaClassic | BeverageKind::CitrusSoda | BeverageKind::MangoJuice => {
                Serving::Cold
            }
            BeverageKind::Americano | BeverageKind::CaffeLatte | BeverageKind::GreenTea => {
                Serving::Hot
            }
        }
    }

    pub fn shelf_life(&self) -> Duration {
        match self {
            BeverageKind::ColaClassic | BeverageKind::CitrusSoda => Duration::days(180),
            BeverageKind::MangoJuice => Duration::days(30),
            BeverageKind::Americano => Duration::days(14),
            BeverageKind::CaffeLatte => Duration::days(7),
            BeverageKind::GreenTea => Duration::days(90),
        }
    }

    fn default_attributes(&self) -> BeverageAttributes {
        match self {
            BeverageKind::ColaClassic => BeverageAttributes::Soda {
                volume_ml: 350,
                sugar_free: false,
            },
            BeverageKind::CitrusSoda => BeverageAttributes::Soda {
                volume_ml: 350,
                sugar_free: true,
            },
            BeverageKind::MangoJuice => BeverageAttributes::Juice {
                volume_ml: 300,
                fruit_content_pct: 40,
            },
            BeverageKind::Americano => BeverageAttributes::HotDrink {
                volume_ml: 250,
                caffeine_mg: 150,
            },
            BeverageKind::CaffeLatte => BeverageAttributes::HotDrink {
                volume_ml: 250,
                caffeine_mg: 75,
            },
            BeverageKind::GreenTea => BeverageAttributes::HotDrink {
                volume_ml: 300,
                caffeine_mg: 25,
            },
        }
    }

    /// Factory: build a fully-formed beverage from the variant's defaults.
    pub fn stock_item(&self, now: DateTime<Utc>) -> Beverage {
        Beverage {
            id: Uuid::new_v4(),
            kind: *self,
            name: self.title().to_string(),
            price: self.default_price(),
            attributes: self.default_attributes(),
            manufactured_at: now,
            expires_at: now + self.shelf_life(),
        }
    }
}

impl core::fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.title())
    }
}

/// Subtype-specific payload. A tagged union, not a subclass chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "family", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeverageAttributes {
    Soda { volume_ml: u32, sugar_free: bool },
    Juice { volume_ml: u32, fruit_content_pct: u8 },
    HotDrink { volume_ml: u32, caffeine_mg: u32 },
}

/// A single stocked item. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Beverage {
    pub id: Uuid,
    pub kind: BeverageKind,
    pub name: String,
    pub price: Money,
    pub attributes: BeverageAttributes,
    pub manufactured_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Beverage {
    /// Expired means strictly past the expiration date.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    pub fn is_hot(&self) -> bool {
        self.kind.serving() == Serving::Hot
    }

    /// Human-readable summary used by menus and the purchase history.
    pub fn description(&self) -> String {
        format!("{} ({})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_defaults() {
        let now = Utc::now();
        let beverage = BeverageKind::ColaClassic.stock_item(now);

        assert_eq!(beverage.kind, BeverageKind::ColaClassic);
        assert_eq!(beverage.name, "Cola Classic");
        assert_eq!(beverage.price, Money::from_minor(700));
        assert_eq!(beverage.manufactured_at, now);
        assert_eq!(beverage.expires_at, now + Duration::days(180));
        assert!(!beverage.is_hot());
    }

    #[test]
    fn test_expiry_is_strictly_before_now() {
        let now = Utc::now();
        let beverage = BeverageKind::GreenTea.stock_item(now - Duration::days(90));

        // Expires exactly at `now`: not yet expired
        assert!(!beverage.is_expired(now));
        assert!(beverage.is_expired(now + Duration::seconds(1)));
    }

    #[test]
    fn test_selection_index_covers_the_enumeration() {
        for (i, kind) in BeverageKind::ALL.iter().enumerate() {
            assert_eq!(BeverageKind::from_index(i), Some(*kind));
        }
        assert_eq!(BeverageKind::from_index(BeverageKind::ALL.len()), None);
    }

    #[test]
    fn test_serving_classification() {
        assert_eq!(BeverageKind::Americano.serving(), Serving::Hot);
        assert_eq!(BeverageKind::ColaClassic.serving(), Serving::Cold);
    }
}
