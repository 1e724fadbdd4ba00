use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use vendo_core::Money;

use crate::beverage::{Beverage, BeverageKind, Serving};
use crate::pack::Pack;

/// Owns every stocked beverage, partitioned by kind.
///
/// A kind, once stocked, keeps its shelf forever, so a sold-out pack stays
/// listable with count 0. The `BTreeMap` keeps listings in enumeration
/// order.
pub struct Inventory {
    shelves: BTreeMap<BeverageKind, Vec<Beverage>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            shelves: BTreeMap::new(),
        }
    }

    /// True iff every shelf is empty.
    pub fn is_empty(&self) -> bool {
        self.shelves.values().all(|shelf| shelf.is_empty())
    }

    /// Total live beverages across all shelves.
    pub fn live_count(&self) -> usize {
        self.shelves.values().map(|shelf| shelf.len()).sum()
    }

    /// Insert one beverage. Always succeeds, no capacity limit.
    pub fn add(&mut self, beverage: Beverage) {
        self.shelves.entry(beverage.kind).or_default().push(beverage);
    }

    /// Ensure a shelf exists for a kind without stocking anything.
    /// Used when restoring a snapshot that held a sold-out pack.
    pub fn register(&mut self, kind: BeverageKind) {
        self.shelves.entry(kind).or_default();
    }

    /// Kinds that have ever been stocked, in enumeration order.
    pub fn stocked_kinds(&self) -> Vec<BeverageKind> {
        self.shelves.keys().copied().collect()
    }

    /// Every live beverage, for snapshotting.
    pub fn beverages(&self) -> impl Iterator<Item = &Beverage> {
        self.shelves.values().flatten()
    }

    /// The pack view for a kind, or None if it was never stocked.
    pub fn pack_of(&self, kind: BeverageKind) -> Option<Pack> {
        let shelf = self.shelves.get(&kind)?;
        let price = Self::next_to_vend(shelf)
            .map(|idx| shelf[idx].price)
            .unwrap_or_else(|| kind.default_price());
        Some(Pack {
            kind,
            title: kind.title().to_string(),
            price,
            count: shelf.len() as u32,
        })
    }

    /// True iff the pack exists but holds nothing.
    pub fn is_sold_out(&self, kind: BeverageKind) -> bool {
        self.shelves.get(&kind).is_some_and(|shelf| shelf.is_empty())
    }

    /// All packs including sold-out ones, in enumeration order.
    pub fn list_all(&self) -> Vec<Pack> {
        self.shelves
            .keys()
            .filter_map(|kind| self.pack_of(*kind))
            .collect()
    }

    /// Packs with stock whose price fits the balance, in enumeration order.
    pub fn list_buyable(&self, balance: Money) -> Vec<Pack> {
        self.list_all()
            .into_iter()
            .filter(|pack| pack.is_buyable(balance))
            .collect()
    }

    /// Packs of hot-served kinds. Pure read.
    pub fn list_hot(&self) -> Vec<Pack> {
        self.list_all()
            .into_iter()
            .filter(|pack| pack.kind.serving() == Serving::Hot)
            .collect()
    }

    /// Vend one beverage of a kind, oldest manufacture date first.
    ///
    /// No state change on failure.
    pub fn remove(&mut self, kind: BeverageKind) -> Result<Beverage, InventoryError> {
        let shelf = self
            .shelves
            .get_mut(&kind)
            .ok_or(InventoryError::PackNotFound(kind))?;
        let idx = Self::next_to_vend(shelf).ok_or(InventoryError::SoldOut(kind))?;
        Ok(shelf.remove(idx))
    }

    /// Remove and return every beverage expired strictly before `now`.
    ///
    /// Idempotent: a second sweep with no time passing and no new stock
    /// returns nothing.
    pub fn remove_expired(&mut self, now: DateTime<Utc>) -> Vec<Beverage> {
        let mut expired = Vec::new();
        for shelf in self.shelves.values_mut() {
            let (gone, kept): (Vec<_>, Vec<_>) = std::mem::take(shelf)
                .into_iter()
                .partition(|beverage| beverage.is_expired(now));
            *shelf = kept;
            expired.extend(gone);
        }
        expired
    }

    // FIFO by manufacture date
    fn next_to_vend(shelf: &[Beverage]) -> Option<usize> {
        shelf
            .iter()
            .enumerate()
            .min_by_key(|(_, beverage)| beverage.manufactured_at)
            .map(|(idx, _)| idx)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("no pack for {0}")]
    PackNotFound(BeverageKind),

    #[error("{0} is sold out")]
    SoldOut(BeverageKind),
}
