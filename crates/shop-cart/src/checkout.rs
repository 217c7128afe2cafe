//! Checkout hand-off to a messaging service.
//!
//! There is no server-side order. Checkout turns the cart into an order
//! message and builds a deep link that opens a chat with the shop with the
//! message pre-filled. Whether the service accepts it is never checked.

use serde::Serialize;
use shop_kv::KvStore;

use crate::cart::CartStore;
use crate::error::CartError;
use crate::locale::{Locale, Message};

/// A built checkout link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLink {
    /// Full URL to open.
    pub url: String,
    /// The unencoded message carried in the URL.
    pub message: String,
}

/// Builds links to an external messaging endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    endpoint: String,
}

impl Handoff {
    /// Create a hand-off to `endpoint` (e.g., `https://m.me/<page>`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The messaging endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the link for the cart's current contents.
    ///
    /// Fails with [`CartError::EmptyCart`] when there is nothing to order;
    /// the cart is never modified.
    pub fn checkout<S: KvStore>(
        &self,
        cart: &CartStore<S>,
        locale: Locale,
    ) -> Result<CheckoutLink, CartError> {
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let order = cart.to_order_text(locale)?;
        let message = format!("{order}\n\n{}", Message::ConfirmOrder.text(locale));
        let url = self.link(&message);
        tracing::debug!(endpoint = %self.endpoint, bytes = url.len(), "checkout link built");

        Ok(CheckoutLink { url, message })
    }

    /// Append `text` as a percent-encoded `text` query parameter.
    pub fn link(&self, text: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}text={}",
            self.endpoint,
            separator,
            urlencoding::encode(text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::settings::{CartSettings, DEFAULT_MESSENGER_URL};
    use shop_kv::MemoryStore;

    #[test]
    fn test_link_encodes_text() {
        let handoff = Handoff::new(DEFAULT_MESSENGER_URL);
        assert_eq!(
            handoff.link("Total: 1,000 MMK\n• Bag & Co"),
            "https://m.me/mimoshandicrafts?text=Total%3A%201%2C000%20MMK%0A%E2%80%A2%20Bag%20%26%20Co"
        );
    }

    #[test]
    fn test_link_uses_ampersand_after_existing_query() {
        let handoff = Handoff::new("https://example.com/send?ref=shop");
        assert_eq!(handoff.link("hi"), "https://example.com/send?ref=shop&text=hi");
    }

    #[test]
    fn test_checkout_empty_cart_fails_without_change() {
        let store = MemoryStore::new();
        let cart = CartStore::open(store.clone(), CartSettings::default());
        let handoff = Handoff::new(DEFAULT_MESSENGER_URL);

        assert!(matches!(
            handoff.checkout(&cart, Locale::En),
            Err(CartError::EmptyCart)
        ));
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_checkout_message_and_url() {
        let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
        cart.add(&Product::new(1, "Handwoven Bag", "bags", 12000)).unwrap();

        let link = Handoff::new(DEFAULT_MESSENGER_URL)
            .checkout(&cart, Locale::En)
            .unwrap();

        assert!(link.message.starts_with("Hello! Order from Mimo's Handicrafts:"));
        assert!(link
            .message
            .ends_with("Total: 12,000 MMK\n\nPlease confirm this order. Thank you!"));
        assert!(link.url.starts_with("https://m.me/mimoshandicrafts?text=Hello%21%20Order"));
        assert_eq!(
            urlencoding::decode(link.url.split("text=").nth(1).unwrap()).unwrap(),
            link.message
        );
        // Checkout leaves the cart alone
        assert_eq!(cart.items().len(), 1);
    }
}
