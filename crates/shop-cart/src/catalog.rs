//! Products offered on the shop page.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::ProductId;
use crate::locale::Locale;

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Myanmar product name.
    #[serde(default, rename = "nameMM", alias = "name_mm", skip_serializing_if = "Option::is_none")]
    pub name_mm: Option<String>,
    /// Category key (e.g., "bags").
    pub category: String,
    /// Myanmar category name.
    #[serde(
        default,
        rename = "categoryMM",
        alias = "category_mm",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_mm: Option<String>,
    /// Image URL or path.
    #[serde(default)]
    pub image: String,
    /// Unit price in the shop currency's minor unit.
    pub price: u64,
}

impl Product {
    /// Create a product with no localized text or image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_mm: None,
            category: category.into(),
            category_mm: None,
            image: String::new(),
            price,
        }
    }

    /// Set the Myanmar name.
    pub fn with_name_mm(mut self, name: impl Into<String>) -> Self {
        self.name_mm = Some(name.into());
        self
    }

    /// Set the Myanmar category name.
    pub fn with_category_mm(mut self, category: impl Into<String>) -> Self {
        self.category_mm = Some(category.into());
        self
    }

    /// Set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Name in the given language.
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(&self.name, self.name_mm.as_deref())
    }

    /// Category in the given language.
    pub fn display_category(&self, locale: Locale) -> &str {
        locale.pick(&self.category, self.category_mm.as_deref())
    }
}

/// Ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog. Later entries with an id already seen are ignored.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            if catalog.get(product.id).is_some() {
                tracing::warn!(id = %product.id, "duplicate product id in catalog, ignoring");
                continue;
            }
            catalog.products.push(product);
        }
        catalog
    }

    /// Find a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by id, or fail with [`CartError::ProductNotFound`].
    pub fn require(&self, id: ProductId) -> Result<&Product, CartError> {
        self.get(id).ok_or(CartError::ProductNotFound(id))
    }

    /// Products in a category, or every product when `category` is `None`.
    pub fn filter<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| category.map_or(true, |c| p.category == c))
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
