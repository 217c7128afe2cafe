//! Shopping cart module.
//!
//! Contains the line item type, the persisted cart store, totals and the
//! order summary text.

mod item;
mod order_text;
mod store;
mod totals;

pub use item::{LineItem, MAX_QUANTITY_PER_ITEM};
pub(crate) use item::{StoredItem, StoredRow};
pub use store::{CartStore, QuantityChange};
pub use totals::CartTotals;
