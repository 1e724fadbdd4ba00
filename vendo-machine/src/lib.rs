pub mod history;
pub mod machine;
pub mod snapshot;

pub use history::{PurchaseHistory, PurchaseRecord};
pub use machine::{VendError, VendingMachine};
pub use snapshot::{MachineSnapshot, SnapshotError, SnapshotStore, SNAPSHOT_VERSION};
