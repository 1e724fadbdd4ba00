use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vendo_catalog::Beverage;

/// One completed purchase. `seq` is 1-based and monotonically increasing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub seq: u32,
    pub description: String,
    pub purchased_at: DateTime<Utc>,
}

/// Append-only ledger of completed purchases.
///
/// Two histories are equal iff their record sequences are equal
/// element-wise, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseHistory {
    records: Vec<PurchaseRecord>,
}

impl PurchaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted records, e.g. at snapshot load.
    pub fn from_records(records: Vec<PurchaseRecord>) -> Self {
        Self { records }
    }

    /// Append a record for a vended beverage, returning its sequence number.
    pub fn record(&mut self, beverage: &Beverage) -> u32 {
        let seq = self.records.len() as u32 + 1;
        self.records.push(PurchaseRecord {
            seq,
            description: beverage.description(),
            purchased_at: Utc::now(),
        });
        seq
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendo_catalog::BeverageKind;

    #[test]
    fn test_sequence_numbers_start_at_one_and_grow() {
        let mut history = PurchaseHistory::new();
        assert!(history.is_empty());

        let cola = BeverageKind::ColaClassic.stock_item(Utc::now());
        let tea = BeverageKind::GreenTea.stock_item(Utc::now());

        assert_eq!(history.record(&cola), 1);
        assert_eq!(history.record(&tea), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].description, cola.description());
        assert_eq!(history.records()[1].seq, 2);
    }

    #[test]
    fn test_equality_is_element_wise_in_order() {
        let now = Utc::now();
        let cola = BeverageKind::ColaClassic.stock_item(now);
        let tea = BeverageKind::GreenTea.stock_item(now);

        let mut a = PurchaseHistory::new();
        a.record(&cola);
        a.record(&tea);

        let b = PurchaseHistory::from_records(a.records().to_vec());
        assert_eq!(a, b);

        let mut swapped = a.records().to_vec();
        swapped.reverse();
        assert_ne!(a, PurchaseHistory::from_records(swapped));
    }
}
