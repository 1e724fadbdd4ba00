pub mod app_config;
pub mod snapshot_repo;

pub use app_config::Config;
pub use snapshot_repo::FileSnapshotStore;

use vendo_machine::{SnapshotStore, VendingMachine};

/// Startup wiring: restore the machine from the configured snapshot,
/// degrading to an empty machine, then optionally drop expired stock.
pub fn open_machine(config: &Config) -> VendingMachine {
    let store = FileSnapshotStore::new(&config.store.snapshot_path);
    let mut machine = VendingMachine::restore(&store);
    if config.machine.sweep_on_load {
        machine.sweep_expired();
    }
    machine
}

/// Shutdown wiring: snapshot the machine and persist it.
pub fn save_machine(
    config: &Config,
    machine: &VendingMachine,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store = FileSnapshotStore::new(&config.store.snapshot_path);
    tracing::info!(path = %store.path().display(), "saving machine state");
    store.save(&machine.snapshot())
}
