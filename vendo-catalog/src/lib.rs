pub mod beverage;
pub mod inventory;
pub mod pack;

pub use beverage::{Beverage, BeverageAttributes, BeverageKind, Serving};
pub use inventory::{Inventory, InventoryError};
pub use pack::Pack;
