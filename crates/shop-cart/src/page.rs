//! The cart page: one store, its view and its hand-off, driven by events.

use serde::Serialize;
use shop_kv::KvStore;

use crate::cart::{CartStore, QuantityChange};
use crate::catalog::Product;
use crate::checkout::{CheckoutLink, Handoff};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::locale::{Locale, Message};
use crate::notice::{Notice, NoticeKind};
use crate::settings::CartSettings;
use crate::view::{CartRender, CartView};

/// Something the shopper did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// "Add to cart" on a product card.
    Add(Product),
    /// Quantity "+" on a row.
    Increment(ProductId),
    /// Quantity "-" on a row.
    Decrement(ProductId),
    /// Delete button on a row.
    Remove(ProductId),
    /// "Clear cart", after the shopper confirmed.
    Clear,
    /// "Proceed" to the messaging service.
    Checkout,
}

/// What the page shows after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Notification to flash, if any.
    pub notice: Option<Notice>,
    /// Fresh render of the cart.
    pub render: CartRender,
    /// Link to open, for a successful checkout.
    pub link: Option<CheckoutLink>,
}

/// A cart page session.
///
/// Constructed once per page and passed by reference to whatever delivers
/// events; it is the only owner of the cart.
#[derive(Debug)]
pub struct CartPage<S> {
    cart: CartStore<S>,
    view: CartView,
    handoff: Handoff,
}

impl<S: KvStore> CartPage<S> {
    /// Open the page over a store, loading the persisted cart.
    pub fn open(store: S, settings: CartSettings, locale: Locale) -> Self {
        let handoff = Handoff::new(settings.messenger_url.clone());
        Self {
            cart: CartStore::open(store, settings),
            view: CartView::new(locale),
            handoff,
        }
    }

    /// Apply an event, persist, and re-render.
    pub fn handle(&mut self, event: CartEvent) -> Result<Outcome, CartError> {
        let locale = self.view.locale();
        let mut link = None;

        let notice = match event {
            CartEvent::Add(product) => {
                let name = product.display_name(locale).to_string();
                match self.cart.add(product) {
                    Ok(_) => Some(Notice::new(
                        NoticeKind::Success,
                        &Message::ItemAdded(name),
                        locale,
                    )),
                    Err(e) => Some(Notice::from_error(&e, locale)),
                }
            }
            CartEvent::Increment(id) => self.change_quantity(id, 1),
            CartEvent::Decrement(id) => self.change_quantity(id, -1),
            CartEvent::Remove(id) => self
                .cart
                .remove(id)
                .then(|| Notice::new(NoticeKind::Info, &Message::ItemRemoved, locale)),
            CartEvent::Clear => {
                if self.cart.is_empty() {
                    None
                } else {
                    self.cart.clear();
                    Some(Notice::new(NoticeKind::Info, &Message::CartCleared, locale))
                }
            }
            CartEvent::Checkout => match self.handoff.checkout(&self.cart, locale) {
                Ok(built) => {
                    link = Some(built);
                    Some(Notice::new(NoticeKind::Success, &Message::Redirecting, locale))
                }
                Err(e) => Some(Notice::from_error(&e, locale)),
            },
        };

        Ok(Outcome {
            notice,
            render: self.render()?,
            link,
        })
    }

    /// Render the cart as it stands.
    pub fn render(&self) -> Result<CartRender, CartError> {
        self.view.render(&self.cart)
    }

    /// Switch page language.
    pub fn set_locale(&mut self, locale: Locale) {
        self.view.set_locale(locale);
    }

    /// Current page language.
    pub fn locale(&self) -> Locale {
        self.view.locale()
    }

    /// The cart store.
    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// The checkout hand-off.
    pub fn handoff(&self) -> &Handoff {
        &self.handoff
    }

    fn change_quantity(&mut self, id: ProductId, delta: i64) -> Option<Notice> {
        let locale = self.view.locale();
        match self.cart.update_quantity(id, delta) {
            Ok(QuantityChange::Updated(_)) => Some(Notice::new(
                NoticeKind::Success,
                &Message::QuantityUpdated,
                locale,
            )),
            Ok(QuantityChange::Removed) => {
                Some(Notice::new(NoticeKind::Info, &Message::ItemRemoved, locale))
            }
            Ok(QuantityChange::Missing) => None,
            Err(e) => Some(Notice::from_error(&e, locale)),
        }
    }
}
