//! Per-shop cart settings.

use serde::{Deserialize, Serialize};

use crate::money::Currency;

/// Storage key the online-shop template writes its cart under.
pub const DEFAULT_STORAGE_KEY: &str = "mimoCart";

/// Messenger endpoint the checkout hand-off links to.
pub const DEFAULT_MESSENGER_URL: &str = "https://m.me/mimoshandicrafts";

/// Settings for one shop's cart.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Key the cart is persisted under.
    pub storage_key: String,

    /// Currency prices are quoted in.
    pub currency: Currency,

    /// Shop name used in the order message.
    pub shop_name: String,

    /// Myanmar shop name used in the order message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name_mm: Option<String>,

    /// Messaging endpoint the order is handed to.
    pub messenger_url: String,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: Currency::MMK,
            shop_name: "Mimo's Handicrafts".to_string(),
            shop_name_mm: Some("မီမို့လက်မှုပစ္စည်းဆိုင်".to_string()),
            messenger_url: DEFAULT_MESSENGER_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: CartSettings =
            serde_json::from_str(r#"{"currency":"USD","shop_name":"Test Shop"}"#).unwrap();
        assert_eq!(settings.currency, Currency::USD);
        assert_eq!(settings.shop_name, "Test Shop");
        assert_eq!(settings.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(settings.messenger_url, DEFAULT_MESSENGER_URL);
    }
}
