use serde::{Deserialize, Serialize};
use vendo_catalog::{Beverage, BeverageKind};
use vendo_core::Money;

use crate::history::PurchaseRecord;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Explicit, versioned persistence schema for the whole machine state.
///
/// `stocked_kinds` carries every kind that ever had a shelf, so a sold-out
/// pack survives a round trip as a listable count-0 entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MachineSnapshot {
    pub version: u32,
    pub balance: Money,
    pub stocked_kinds: Vec<BeverageKind>,
    pub beverages: Vec<Beverage>,
    pub history: Vec<PurchaseRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

/// Persistence port. Implementations live in the store crate; the machine
/// only needs load and save.
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when no snapshot has ever been saved.
    fn load(&self) -> Result<Option<MachineSnapshot>, Box<dyn std::error::Error + Send + Sync>>;

    fn save(
        &self,
        snapshot: &MachineSnapshot,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
