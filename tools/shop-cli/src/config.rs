//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_cart::catalog::{Catalog, Product};
use shop_cart::locale::Locale;
use shop_cart::settings::CartSettings;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default display language.
    #[serde(default)]
    pub language: Locale,

    /// Cart settings.
    #[serde(default)]
    pub cart: CartSettings,

    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Products offered by the shop.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; `path` picks the format.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// The product catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.products.iter().cloned())
    }
}

/// Where the cart is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the file store, relative to the config file.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".shop".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront cart configuration

# Display language: "en" or "mm"
language = "en"

[cart]
storage_key = "mimoCart"
currency = "MMK"
shop_name = "Mimo's Handicrafts"
shop_name_mm = "မီမို့လက်မှုပစ္စည်းဆိုင်"
messenger_url = "https://m.me/mimoshandicrafts"

[storage]
dir = ".shop"

[[products]]
id = 1
name = "Handwoven Bag"
name_mm = "လက်ရက်အိတ်"
category = "bags"
category_mm = "အိတ်များ"
image = "images/bag.jpg"
price = 29000

[[products]]
id = 2
name = "Traditional Necklace"
category = "jewelry"
category_mm = "ရတနာ"
image = "images/necklace.jpg"
price = 19000

[[products]]
id = 3
name = "Textile Scarf"
category = "textiles"
category_mm = "အထည်အလိပ်"
image = "images/scarf.jpg"
price = 14000

[[products]]
id = 4
name = "Decorative Vase"
category = "homeDecor"
category_mm = "အိမ်အလှဆင်"
image = "images/vase.jpg"
price = 24000
"#
    .to_string()
}
