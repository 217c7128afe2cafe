//! Shopping cart for storefront templates.
//!
//! This crate provides the cart behind the online-shop template pages:
//!
//! - **Cart store**: line items persisted to a key-value store on every change
//! - **Cart view**: display rows and totals rendered from the store
//! - **Checkout hand-off**: the order as a pre-filled messaging deep link
//! - **Cart page**: one store, view and hand-off, driven by shopper events
//!
//! # Example
//!
//! ```rust
//! use shop_cart::prelude::*;
//! use shop_kv::MemoryStore;
//!
//! let mut page = CartPage::open(MemoryStore::new(), CartSettings::default(), Locale::En);
//!
//! let bag = Product::new(1, "Handwoven Bag", "bags", 12000);
//! page.handle(CartEvent::Add(bag)).unwrap();
//!
//! let outcome = page.handle(CartEvent::Checkout).unwrap();
//! let link = outcome.link.unwrap();
//! assert!(link.url.starts_with("https://m.me/mimoshandicrafts?text="));
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod locale;
pub mod money;
pub mod notice;
pub mod page;
pub mod settings;
pub mod view;

pub use error::CartError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartStore, CartTotals, LineItem, QuantityChange, MAX_QUANTITY_PER_ITEM};
    pub use crate::catalog::{Catalog, Product};
    pub use crate::checkout::{CheckoutLink, Handoff};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::locale::{Locale, Message};
    pub use crate::money::{Currency, Money};
    pub use crate::notice::{Notice, NoticeKind};
    pub use crate::page::{CartEvent, CartPage, Outcome};
    pub use crate::settings::CartSettings;
    pub use crate::view::{CartRender, CartRow, CartSummary, CartView};
}
