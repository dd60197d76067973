//! Market inventory domain.
//!
//! Items, the food trucks stocking them, and the market event that aggregates
//! stock across trucks. Pure in-memory logic (no IO, no storage).

pub mod event;
pub mod food_truck;
pub mod item;
pub mod policy;
pub mod report;

pub use event::{Event, ItemTotal, TotalInventory};
pub use food_truck::{FoodTruck, Inventory};
pub use item::{CURRENCY_SYMBOL, Item, Price};
pub use policy::OverstockPolicy;
pub use report::{EventReport, FoodTruckSummary, ItemTotalRow};
