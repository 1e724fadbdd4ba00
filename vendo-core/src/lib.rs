pub mod display;
pub mod money;

pub use display::DisplayPort;
pub use money::{Money, MoneyError};
