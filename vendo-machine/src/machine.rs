use chrono::Utc;
use vendo_catalog::{Beverage, BeverageKind, Inventory, InventoryError, Pack};
use vendo_core::{DisplayPort, Money, MoneyError};

use crate::history::PurchaseHistory;
use crate::snapshot::{MachineSnapshot, SnapshotError, SnapshotStore, SNAPSHOT_VERSION};

/// The single owner of balance, inventory, and purchase history.
///
/// Every mutation goes through one of its methods; a failed operation
/// leaves all three untouched.
pub struct VendingMachine {
    balance: Money,
    inventory: Inventory,
    history: PurchaseHistory,
}

impl VendingMachine {
    /// Empty default machine: zero balance, nothing stocked, no history.
    pub fn new() -> Self {
        Self {
            balance: Money::ZERO,
            inventory: Inventory::new(),
            history: PurchaseHistory::new(),
        }
    }

    // --- consumer operations ---

    /// Accept inserted money. A zero amount is rejected and the balance is
    /// unchanged; negative amounts never get past `Money::new`.
    pub fn insert_money(&mut self, amount: Money) -> Result<Money, VendError> {
        if amount.is_zero() {
            return Err(VendError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VendError::InvalidAmount)?;
        tracing::debug!(balance = self.balance.amount(), "money inserted");
        Ok(self.balance)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Packs the consumer can buy right now.
    pub fn buyable_packs(&self) -> Vec<Pack> {
        self.inventory.list_buyable(self.balance)
    }

    /// Vend one beverage of a kind.
    ///
    /// Atomic: every precondition is checked before the first mutation, so
    /// inventory, balance, and history change together or not at all. The
    /// deducted price is the vended beverage's own price.
    pub fn buy(&mut self, kind: BeverageKind) -> Result<Beverage, VendError> {
        let pack = self
            .inventory
            .pack_of(kind)
            .ok_or(VendError::PackNotFound(kind))?;
        if pack.count == 0 {
            return Err(VendError::SoldOut(kind));
        }
        let remaining = self
            .balance
            .checked_sub(pack.price)
            .ok_or(VendError::NotBuyable(kind))?;

        let beverage = self.inventory.remove(kind)?;
        self.balance = remaining;
        let seq = self.history.record(&beverage);
        tracing::info!(
            kind = %kind,
            seq,
            balance = self.balance.amount(),
            "beverage vended"
        );
        Ok(beverage)
    }

    // --- manager operations ---

    /// Insert a fully-formed beverage.
    pub fn add_beverage(&mut self, beverage: Beverage) {
        self.inventory.add(beverage);
    }

    /// Stock one factory-default beverage of a kind. Always succeeds.
    pub fn restock(&mut self, kind: BeverageKind) -> Beverage {
        let beverage = kind.stock_item(Utc::now());
        let stocked = beverage.clone();
        self.inventory.add(beverage);
        tracing::debug!(kind = %kind, "beverage stocked");
        stocked
    }

    /// Remove one unit by the manager's numeric selection.
    ///
    /// An out-of-range selection is `UnknownSelection`; a known kind with
    /// nothing to vend surfaces the inventory failure.
    pub fn remove_stock(&mut self, selection: usize) -> Result<Beverage, VendError> {
        let kind =
            BeverageKind::from_index(selection).ok_or(VendError::UnknownSelection(selection))?;
        Ok(self.inventory.remove(kind)?)
    }

    /// Remove every expired beverage and return them for reporting.
    pub fn sweep_expired(&mut self) -> Vec<Beverage> {
        let swept = self.inventory.remove_expired(Utc::now());
        if !swept.is_empty() {
            tracing::info!(count = swept.len(), "expired beverages removed");
        }
        swept
    }

    // --- read-only projections ---

    pub fn all_packs(&self) -> Vec<Pack> {
        self.inventory.list_all()
    }

    pub fn hot_packs(&self) -> Vec<Pack> {
        self.inventory.list_hot()
    }

    /// Stock count behind a numeric selection. None for an unknown index;
    /// a known kind that was never stocked counts as 0.
    pub fn stock_count(&self, selection: usize) -> Option<u32> {
        let kind = BeverageKind::from_index(selection)?;
        Some(
            self.inventory
                .pack_of(kind)
                .map(|pack| pack.count)
                .unwrap_or(0),
        )
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history(&self) -> &PurchaseHistory {
        &self.history
    }

    pub fn is_sold_out_entirely(&self) -> bool {
        self.inventory.is_empty()
    }

    // --- display pass-throughs ---

    pub fn show_balance(&self, display: &mut dyn DisplayPort) {
        display.balance(self.balance.amount());
    }

    /// Full inventory for the manager, sold-out packs included.
    pub fn show_inventory(&self, display: &mut dyn DisplayPort) {
        for pack in self.inventory.list_all() {
            display.stock_line(&pack.title, pack.count, pack.is_buyable(self.balance));
        }
    }

    /// Consumer menu of buyable packs. Short-circuits with `OutOfStock`
    /// when the whole inventory is empty.
    pub fn show_menu(&self, display: &mut dyn DisplayPort) -> Result<(), VendError> {
        if self.inventory.is_empty() {
            return Err(VendError::OutOfStock);
        }
        let packs = self.buyable_packs();
        let last = packs.len();
        for (idx, pack) in packs.iter().enumerate() {
            display.menu_line(idx + 1, &pack.description(), idx + 1 == last);
        }
        Ok(())
    }

    pub fn show_history(&self, display: &mut dyn DisplayPort) {
        for record in self.history.records() {
            display.history_line(record.seq, &record.description);
        }
    }

    // --- persistence ---

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            version: SNAPSHOT_VERSION,
            balance: self.balance,
            stocked_kinds: self.inventory.stocked_kinds(),
            beverages: self.inventory.beverages().cloned().collect(),
            history: self.history.records().to_vec(),
        }
    }

    pub fn from_snapshot(snapshot: MachineSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        let mut inventory = Inventory::new();
        for kind in snapshot.stocked_kinds {
            inventory.register(kind);
        }
        for beverage in snapshot.beverages {
            inventory.add(beverage);
        }
        Ok(Self {
            balance: snapshot.balance,
            inventory,
            history: PurchaseHistory::from_records(snapshot.history),
        })
    }

    /// Restore from a store, degrading to the empty default machine when
    /// there is no snapshot or loading fails.
    pub fn restore(store: &dyn SnapshotStore) -> Self {
        match store.load() {
            Ok(Some(snapshot)) => match Self::from_snapshot(snapshot) {
                Ok(machine) => machine,
                Err(err) => {
                    tracing::warn!(%err, "snapshot rejected, starting empty");
                    Self::new()
                }
            },
            Ok(None) => Self::new(),
            Err(err) => {
                tracing::warn!(%err, "snapshot load failed, starting empty");
                Self::new()
            }
        }
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VendError {
    #[error("amount must be positive")]
    InvalidAmount,

    #[error("no beverage registered at selection {0}")]
    UnknownSelection(usize),

    #[error("no pack for {0}")]
    PackNotFound(BeverageKind),

    #[error("{0} is sold out")]
    SoldOut(BeverageKind),

    #[error("balance too low for {0}")]
    NotBuyable(BeverageKind),

    #[error("inventory is empty")]
    OutOfStock,
}

impl From<InventoryError> for VendError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::PackNotFound(kind) => VendError::PackNotFound(kind),
            InventoryError::SoldOut(kind) => VendError::SoldOut(kind),
        }
    }
}

impl From<MoneyError> for VendError {
    fn from(_: MoneyError) -> Self {
        VendError::InvalidAmount
    }
}
