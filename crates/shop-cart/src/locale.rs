//! Page languages and the cart's user-facing messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the page (the `data-lang` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Myanmar.
    Mm,
}

impl Locale {
    /// Get the language code ("en" or "mm").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Mm => "mm",
        }
    }

    /// Parse a language code. Region suffixes are ignored ("en-US" is English).
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code.split(['-', '_']).next().unwrap_or_default();
        match lang.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            // "my" is the ISO 639-1 code, "mm" is what the pages use.
            "mm" | "my" => Some(Locale::Mm),
            _ => None,
        }
    }

    /// Pick the localized text if this is Myanmar and one exists.
    pub fn pick<'a>(&self, default: &'a str, localized: Option<&'a str>) -> &'a str {
        match (self, localized) {
            (Locale::Mm, Some(text)) if !text.is_empty() => text,
            _ => default,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| format!("unsupported language: {s}"))
    }
}

/// Messages the cart shows to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ItemAdded(String),
    QuantityUpdated,
    QuantityLimit,
    ItemRemoved,
    ConfirmClear,
    CartCleared,
    CartEmpty,
    Redirecting,
    ConfirmOrder,
}

impl Message {
    /// Render the message in the given language.
    pub fn text(&self, locale: Locale) -> String {
        match (self, locale) {
            (Message::ItemAdded(name), Locale::En) => format!("{name} added to cart!"),
            (Message::ItemAdded(name), Locale::Mm) => {
                format!("{name} ကို ခြင်းတောင်းထဲသို့ ထည့်ပြီးပါပြီ")
            }
            (Message::QuantityUpdated, Locale::En) => "Quantity updated".into(),
            (Message::QuantityUpdated, Locale::Mm) => "အရေအတွက် ပြင်ဆင်ပြီးပါပြီ".into(),
            (Message::QuantityLimit, Locale::En) => "Quantity limit reached".into(),
            (Message::QuantityLimit, Locale::Mm) => {
                "အရေအတွက် ကန့်သတ်ချက် ပြည့်သွားပါပြီ".into()
            }
            (Message::ItemRemoved, Locale::En) => "Item removed from cart".into(),
            (Message::ItemRemoved, Locale::Mm) => {
                "ပစ္စည်းကို ခြင်းတောင်းထဲမှ ဖယ်ရှားပြီးပါပြီ".into()
            }
            (Message::ConfirmClear, Locale::En) => {
                "Are you sure you want to clear your cart?".into()
            }
            (Message::ConfirmClear, Locale::Mm) => {
                "စျေးဝယ်ခြင်းတောင်းကို ဖျက်မှာသေချာလား?".into()
            }
            (Message::CartCleared, Locale::En) => "Cart cleared successfully".into(),
            (Message::CartCleared, Locale::Mm) => {
                "စျေးဝယ်ခြင်းတောင်းကို ရှင်းလင်းပြီးပါပြီ".into()
            }
            (Message::CartEmpty, Locale::En) => "Your cart is empty".into(),
            (Message::CartEmpty, Locale::Mm) => {
                "စျေးဝယ်ခြင်းတောင်းထဲတွင် ပစ္စည်းမရှိပါ".into()
            }
            (Message::Redirecting, Locale::En) => "Redirecting to Messenger...".into(),
            (Message::Redirecting, Locale::Mm) => "Messenger သို့ ပို့ဆောင်နေပါသည်...".into(),
            (Message::ConfirmOrder, Locale::En) => "Please confirm this order. Thank you!".into(),
            (Message::ConfirmOrder, Locale::Mm) => {
                "မှာယူမှုကို အတည်ပြုပေးပါ။ ကျေးဇူးတင်ပါတယ်!".into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("MM"), Some(Locale::Mm));
        assert_eq!(Locale::from_code("my_MM"), Some(Locale::Mm));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn test_pick_falls_back_to_default() {
        assert_eq!(Locale::Mm.pick("Bag", Some("အိတ်")), "အိတ်");
        assert_eq!(Locale::Mm.pick("Bag", None), "Bag");
        assert_eq!(Locale::Mm.pick("Bag", Some("")), "Bag");
        assert_eq!(Locale::En.pick("Bag", Some("အိတ်")), "Bag");
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Message::ItemAdded("Handwoven Bag".into()).text(Locale::En),
            "Handwoven Bag added to cart!"
        );
        assert_eq!(Message::CartEmpty.text(Locale::En), "Your cart is empty");
        assert!(Message::CartEmpty.text(Locale::Mm).contains("ပစ္စည်းမရှိပါ"));
    }

    #[test]
    fn test_locale_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Mm).unwrap(), "\"mm\"");
        let l: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(l, Locale::En);
    }
}
