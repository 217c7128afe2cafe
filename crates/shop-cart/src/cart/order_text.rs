//! Human-readable order summary.

use std::fmt::Write as _;

use crate::cart::{CartTotals, LineItem};
use crate::error::CartError;
use crate::locale::Locale;
use crate::settings::CartSettings;

struct Labels {
    quantity: &'static str,
    price: &'static str,
    subtotal: &'static str,
    total: &'static str,
}

const EN: Labels = Labels {
    quantity: "Quantity",
    price: "Price",
    subtotal: "Subtotal",
    total: "Total",
};

const MM: Labels = Labels {
    quantity: "အရေအတွက်",
    price: "တစ်ခုချင်းစျေး",
    subtotal: "စုစုပေါင်း",
    total: "စုစုပေါင်းကျသင့်ငွေ",
};

/// Format the order message: greeting, one block per item, total last.
pub(crate) fn render(
    items: &[LineItem],
    totals: &CartTotals,
    settings: &CartSettings,
    locale: Locale,
) -> Result<String, CartError> {
    let labels = match locale {
        Locale::En => &EN,
        Locale::Mm => &MM,
    };
    let shop = locale.pick(&settings.shop_name, settings.shop_name_mm.as_deref());

    let mut text = match locale {
        Locale::En => format!("Hello! Order from {shop}:\n\n"),
        Locale::Mm => format!("မင်္ဂလာပါ! {shop}မှ မှာယူမှုစာရင်း:\n\n"),
    };

    for item in items {
        let unit = item.unit_price(settings.currency)?;
        let line = item.line_total(settings.currency)?;
        // Writing to a String cannot fail.
        let _ = write!(
            text,
            "• {}\n  {}: {}\n  {}: {}\n  {}: {}\n\n",
            item.display_name(locale),
            labels.quantity,
            item.quantity,
            labels.price,
            unit,
            labels.subtotal,
            line,
        );
    }

    let _ = write!(text, "{}: {}", labels.total, totals.total);
    Ok(text)
}
