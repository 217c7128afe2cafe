//! Cart line items and their persisted form.

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::locale::Locale;
use crate::money::{Currency, Money};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Product identifier; unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Myanmar product name.
    pub name_mm: Option<String>,
    /// Category.
    pub category: String,
    /// Myanmar category name.
    pub category_mm: Option<String>,
    /// Image URL or path.
    pub image: String,
    /// Unit price in the shop currency's minor unit.
    pub price: u64,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Name in the given language.
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(&self.name, self.name_mm.as_deref())
    }

    /// Category in the given language.
    pub fn display_category(&self, locale: Locale) -> &str {
        locale.pick(&self.category, self.category_mm.as_deref())
    }

    /// Unit price as money.
    pub fn unit_price(&self, currency: Currency) -> Result<Money, CartError> {
        i64::try_from(self.price)
            .map(|amount| Money::new(amount, currency))
            .map_err(|_| CartError::Overflow)
    }

    /// Unit price times quantity.
    pub fn line_total(&self, currency: Currency) -> Result<Money, CartError> {
        self.unit_price(currency)?
            .try_multiply(i64::from(self.quantity))
            .ok_or(CartError::Overflow)
    }
}

impl From<&Product> for LineItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            name_mm: product.name_mm.clone(),
            category: product.category.clone(),
            category_mm: product.category_mm.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

impl From<Product> for LineItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            name_mm: product.name_mm,
            category: product.category,
            category_mm: product.category_mm,
            image: product.image,
            price: product.price,
            quantity: 1,
        }
    }
}

/// A line item as the shop page script stores it.
///
/// Field names match the page, and `price` is a plain number in major units
/// (`29.99`), so a cart written by either side loads in the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StoredItem {
    pub(crate) id: ProductId,
    pub(crate) name: String,
    #[serde(default, rename = "nameMM", skip_serializing_if = "Option::is_none")]
    pub(crate) name_mm: Option<String>,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default, rename = "categoryMM", skip_serializing_if = "Option::is_none")]
    pub(crate) category_mm: Option<String>,
    #[serde(default)]
    pub(crate) image: String,
    #[serde(serialize_with = "serialize_price")]
    pub(crate) price: f64,
    pub(crate) quantity: u32,
}

/// One element of the persisted array. Rows that don't parse are kept as
/// `Invalid` so the rest of the cart still loads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredRow {
    Item(StoredItem),
    Invalid(#[allow(dead_code)] serde::de::IgnoredAny),
}

impl StoredItem {
    /// Persisted form of `item`, with the price in major units of `currency`.
    pub(crate) fn from_item(item: &LineItem, currency: Currency) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            name_mm: item.name_mm.clone(),
            category: item.category.clone(),
            category_mm: item.category_mm.clone(),
            image: item.image.clone(),
            price: item.price as f64 / minor_per_major(currency),
            quantity: item.quantity,
        }
    }

    /// Convert to a line item, rounding the price to `currency`'s minor unit.
    ///
    /// Returns `None` for a negative or unrepresentable price.
    pub(crate) fn into_item(self, currency: Currency) -> Option<LineItem> {
        let minor = (self.price * minor_per_major(currency)).round();
        if !minor.is_finite() || minor < 0.0 || minor >= i64::MAX as f64 {
            return None;
        }

        Some(LineItem {
            id: self.id,
            name: self.name,
            name_mm: self.name_mm,
            category: self.category,
            category_mm: self.category_mm,
            image: self.image,
            price: minor as u64,
            quantity: self.quantity,
        })
    }
}

fn minor_per_major(currency: Currency) -> f64 {
    10_f64.powi(currency.decimal_places() as i32)
}

/// Whole prices are written as integers (`12000`, not `12000.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && *price >= 0.0 && *price < u64::MAX as f64 {
        serializer.serialize_u64(*price as u64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_starts_at_one() {
        let product = Product::new(3, "Textile Scarf", "textiles", 14000).with_name_mm("ပဝါ");
        let item = LineItem::from(&product);
        assert_eq!(item.id, ProductId::new(3));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.display_name(Locale::Mm), "ပဝါ");
    }

    #[test]
    fn test_line_total() {
        let mut item = LineItem::from(Product::new(1, "Bag", "bags", 100));
        item.quantity = 3;
        assert_eq!(
            item.line_total(Currency::MMK).unwrap(),
            Money::new(300, Currency::MMK)
        );
    }

    #[test]
    fn test_line_total_overflow() {
        let mut item = LineItem::from(Product::new(1, "Bag", "bags", u64::MAX));
        assert!(matches!(item.unit_price(Currency::MMK), Err(CartError::Overflow)));
        item.price = i64::MAX as u64;
        item.quantity = 2;
        assert!(matches!(item.line_total(Currency::MMK), Err(CartError::Overflow)));
    }

    #[test]
    fn test_stored_field_names() {
        let item = LineItem::from(
            Product::new(1, "Bag", "bags", 12000)
                .with_name_mm("အိတ်")
                .with_image("images/bag.jpg"),
        );
        let json = serde_json::to_value(StoredItem::from_item(&item, Currency::MMK)).unwrap();
        assert_eq!(json["nameMM"], "အိတ်");
        assert_eq!(json["image"], "images/bag.jpg");
        assert_eq!(json["quantity"], 1);
        assert!(json.get("categoryMM").is_none());
        assert_eq!(serde_json::to_string(&json["price"]).unwrap(), "12000");
    }

    #[test]
    fn test_stored_price_in_major_units() {
        let item = LineItem::from(Product::new(2, "Necklace", "jewelry", 1999));
        let stored = StoredItem::from_item(&item, Currency::USD);
        assert_eq!(serde_json::to_string(&stored.price).unwrap(), "19.99");
        assert_eq!(stored.into_item(Currency::USD), Some(item));
    }

    #[test]
    fn test_deserialize_page_row() {
        let stored: StoredItem = serde_json::from_str(
            r#"{"id":2,"name":"Necklace","categoryMM":"ရတနာ","price":19.99,"quantity":2}"#,
        )
        .unwrap();
        let item = stored.clone().into_item(Currency::USD).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.display_category(Locale::Mm), "ရတနာ");
        assert_eq!(item.price, 1999);
        assert_eq!(item.quantity, 2);

        // Kyat has no minor unit; fractions round to the nearest kyat.
        assert_eq!(stored.into_item(Currency::MMK).unwrap().price, 20);
    }

    #[test]
    fn test_invalid_prices_rejected() {
        let row = |price: f64| StoredItem {
            id: ProductId::new(1),
            name: "Bag".to_string(),
            name_mm: None,
            category: String::new(),
            category_mm: None,
            image: String::new(),
            price,
            quantity: 1,
        };
        assert!(row(-1.0).into_item(Currency::MMK).is_none());
        assert!(row(1e19).into_item(Currency::MMK).is_none());
        assert!(row(0.0).into_item(Currency::MMK).is_some());
    }

    #[test]
    fn test_malformed_row_is_invalid() {
        let rows: Vec<StoredRow> = serde_json::from_str(
            r#"[{"id":1,"name":"A","price":10,"quantity":1},{"id":"p2","price":"x"}]"#,
        )
        .unwrap();
        assert!(matches!(rows[0], StoredRow::Item(_)));
        assert!(matches!(rows[1], StoredRow::Invalid(_)));
    }
}
