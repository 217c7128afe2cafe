//! The cart store: owns the line items and writes them through to storage.

use shop_kv::{JsonStore, KvStore};

use crate::cart::{order_text, CartTotals, LineItem, StoredItem, StoredRow, MAX_QUANTITY_PER_ITEM};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::locale::Locale;
use crate::money::{Currency, Money};
use crate::settings::CartSettings;

/// Result of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item now has this quantity.
    Updated(u32),
    /// The quantity reached zero and the item was removed.
    Removed,
    /// No item with that id is in the cart.
    Missing,
}

/// Shopping cart persisted to a key-value store.
///
/// Every mutation writes the whole list back under the configured key
/// before returning. Writes are best-effort: a failed write is logged and
/// the in-memory list stays authoritative.
///
/// The list always has representable totals, so it can always be rendered.
///
/// # Example
///
/// ```rust
/// use shop_cart::prelude::*;
/// use shop_kv::MemoryStore;
///
/// let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
/// let bag = Product::new(1, "Handwoven Bag", "bags", 100);
///
/// cart.add(&bag).unwrap();
/// cart.add(&bag).unwrap();
///
/// assert_eq!(cart.items().len(), 1);
/// assert_eq!(cart.totals().unwrap().item_count, 2);
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    store: JsonStore<S>,
    settings: CartSettings,
    items: Vec<LineItem>,
}

impl<S: KvStore> CartStore<S> {
    /// Open the cart, loading whatever is persisted under the storage key.
    pub fn open(store: S, settings: CartSettings) -> Self {
        let mut cart = Self {
            store: JsonStore::new(store),
            settings,
            items: Vec::new(),
        };
        cart.load();
        cart
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Missing data, or data that is not an array, yields an empty cart.
    /// Within the array, rows that don't parse, have a negative price or
    /// zero quantity are dropped, repeated ids are folded into the first
    /// row, and rows that would overflow the totals are dropped.
    pub fn load(&mut self) {
        let key = &self.settings.storage_key;
        self.items = match self.store.get::<Vec<StoredRow>>(key) {
            Ok(Some(rows)) => normalize(rows, self.settings.currency),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "discarding unreadable cart");
                Vec::new()
            }
        };
        tracing::debug!(key = %key, items = self.items.len(), "cart loaded");
    }

    /// Add one unit of an item.
    ///
    /// An item already in the cart has its quantity incremented; otherwise it
    /// is appended with quantity one, whatever quantity `item` carries.
    /// Returns the item's new quantity.
    pub fn add(&mut self, item: impl Into<LineItem>) -> Result<u32, CartError> {
        let mut item = item.into();
        let id = item.id;

        let quantity = if let Some(pos) = self.items.iter().position(|i| i.id == id) {
            let previous = self.items[pos].quantity;
            let next = previous.saturating_add(1);
            if next > MAX_QUANTITY_PER_ITEM {
                return Err(CartError::QuantityExceedsLimit(
                    i64::from(next),
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            self.items[pos].quantity = next;
            if let Err(e) = self.totals() {
                self.items[pos].quantity = previous;
                return Err(e);
            }
            next
        } else {
            item.quantity = 1;
            self.items.push(item);
            if let Err(e) = self.totals() {
                self.items.pop();
                return Err(e);
            }
            1
        };

        tracing::debug!(%id, quantity, "item added to cart");
        self.persist();
        Ok(quantity)
    }

    /// Apply `delta` to an item's quantity.
    ///
    /// A result of zero or less removes the item. A result above
    /// [`MAX_QUANTITY_PER_ITEM`] is rejected and nothing changes.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        delta: i64,
    ) -> Result<QuantityChange, CartError> {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Ok(QuantityChange::Missing);
        };

        let next = i64::from(self.items[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(pos);
            tracing::debug!(%id, "item removed at zero quantity");
            self.persist();
            return Ok(QuantityChange::Removed);
        }
        if next > i64::from(MAX_QUANTITY_PER_ITEM) {
            return Err(CartError::QuantityExceedsLimit(next, MAX_QUANTITY_PER_ITEM));
        }

        // Bounded by MAX_QUANTITY_PER_ITEM above.
        let quantity = next as u32;
        let previous = self.items[pos].quantity;
        self.items[pos].quantity = quantity;
        if let Err(e) = self.totals() {
            self.items[pos].quantity = previous;
            return Err(e);
        }
        tracing::debug!(%id, quantity, "quantity updated");
        self.persist();
        Ok(QuantityChange::Updated(quantity))
    }

    /// Remove an item. Returns whether it was in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(%id, "item removed");
            self.persist();
        }
        removed
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::debug!("cart cleared");
        self.persist();
    }

    /// Item count and subtotal.
    pub fn totals(&self) -> Result<CartTotals, CartError> {
        CartTotals::compute(&self.items, self.settings.currency)
    }

    /// Multi-line order summary in the given language, ending with the total.
    pub fn to_order_text(&self, locale: Locale) -> Result<String, CartError> {
        let totals = self.totals()?;
        order_text::render(&self.items, &totals, &self.settings, locale)
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number shown on the cart badge (sum of quantities).
    pub fn badge_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Currency prices are quoted in.
    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    fn persist(&self) {
        let key = &self.settings.storage_key;
        let currency = self.settings.currency;
        let rows: Vec<StoredItem> = self
            .items
            .iter()
            .map(|item| StoredItem::from_item(item, currency))
            .collect();
        if let Err(e) = self.store.set(key, &rows) {
            tracing::warn!(key = %key, error = %e, "failed to persist cart");
        }
    }
}

fn normalize(rows: Vec<StoredRow>, currency: Currency) -> Vec<LineItem> {
    let mut items: Vec<LineItem> = Vec::with_capacity(rows.len());
    for row in rows {
        let StoredRow::Item(stored) = row else {
            tracing::warn!("dropping malformed cart row");
            continue;
        };
        let id = stored.id;
        let Some(mut item) = stored.into_item(currency) else {
            tracing::warn!(%id, "dropping cart row with invalid price");
            continue;
        };
        if item.quantity == 0 {
            continue;
        }
        if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(item.quantity)
                .min(MAX_QUANTITY_PER_ITEM);
        } else {
            item.quantity = item.quantity.min(MAX_QUANTITY_PER_ITEM);
            items.push(item);
        }
    }

    let mut running = Money::zero(currency);
    items.retain(|item| {
        let next = item
            .line_total(currency)
            .ok()
            .and_then(|line| running.try_add(&line));
        match next {
            Some(total) => {
                running = total;
                true
            }
            None => {
                tracing::warn!(id = %item.id, "dropping cart row whose total overflows");
                false
            }
        }
    });
    items
}
