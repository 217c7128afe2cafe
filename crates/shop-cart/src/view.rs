//! Cart rendering.
//!
//! The view holds no cart state. [`CartView::render`] turns the store's
//! current list into display rows and is called again after every
//! mutation; the output depends only on its inputs.

use serde::Serialize;
use shop_kv::KvStore;

use crate::cart::{CartStore, MAX_QUANTITY_PER_ITEM};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::locale::Locale;

/// One displayed line item with its controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    /// Product identifier the row's controls act on.
    pub id: ProductId,
    /// Name in the view's language.
    pub name: String,
    /// Category in the view's language.
    pub category: String,
    /// Image URL or path.
    pub image: String,
    /// Formatted unit price (e.g., "12,000 MMK").
    pub unit_price: String,
    /// Quantity shown between the buttons.
    pub quantity: u32,
    /// Formatted unit price × quantity.
    pub line_total: String,
    /// Decrement button state; disabled at quantity 1 (remove is used instead).
    pub can_decrement: bool,
    /// Increment button state; disabled at the per-item limit.
    pub can_increment: bool,
}

/// Summary block under the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted amount due.
    pub total: String,
}

/// What the cart page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CartRender {
    /// Empty-state panel; rows and summary hidden.
    Empty,
    /// Rows plus summary.
    Items {
        rows: Vec<CartRow>,
        summary: CartSummary,
    },
}

impl CartRender {
    /// Check if this is the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, CartRender::Empty)
    }

    /// Rows, empty for the empty state.
    pub fn rows(&self) -> &[CartRow] {
        match self {
            CartRender::Empty => &[],
            CartRender::Items { rows, .. } => rows,
        }
    }
}

/// Renders a cart in one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartView {
    locale: Locale,
}

impl CartView {
    /// Create a view for the given language.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Language the view renders in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch language; the next render uses it.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Render the full cart.
    pub fn render<S: KvStore>(&self, cart: &CartStore<S>) -> Result<CartRender, CartError> {
        if cart.is_empty() {
            return Ok(CartRender::Empty);
        }

        let currency = cart.currency();
        let rows = cart
            .items()
            .iter()
            .map(|item| {
                Ok(CartRow {
                    id: item.id,
                    name: item.display_name(self.locale).to_string(),
                    category: item.display_category(self.locale).to_string(),
                    image: item.image.clone(),
                    unit_price: item.unit_price(currency)?.display(),
                    quantity: item.quantity,
                    line_total: item.line_total(currency)?.display(),
                    can_decrement: item.quantity > 1,
                    can_increment: item.quantity < MAX_QUANTITY_PER_ITEM,
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;

        let totals = cart.totals()?;
        Ok(CartRender::Items {
            rows,
            summary: CartSummary {
                item_count: totals.item_count,
                subtotal: totals.subtotal.display(),
                total: totals.total.display(),
            },
        })
    }
}
