//! List the product catalog.

use anyhow::{bail, Result};
use serde::Serialize;
use shop_cart::money::Money;
use shop_cart::ProductId;

use super::ProductsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ProductLine<'a> {
    id: ProductId,
    name: &'a str,
    category: &'a str,
    price: String,
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    if catalog.is_empty() {
        bail!("No products configured. Run `shop config init` to create a starter shop.toml.");
    }

    if let Some(category) = args.category.as_deref() {
        if !catalog.categories().contains(&category) {
            bail!(
                "Unknown category '{}'. Available: {}",
                category,
                catalog.categories().join(", ")
            );
        }
    }

    let currency = ctx.config.cart.currency;
    let mut lines = Vec::new();
    for product in catalog.filter(args.category.as_deref()) {
        let price = i64::try_from(product.price)
            .map(|amount| Money::new(amount, currency).display())
            .unwrap_or_else(|_| format!("{} {}", product.price, currency.code()));
        lines.push(ProductLine {
            id: product.id,
            name: product.display_name(ctx.locale),
            category: product.display_category(ctx.locale),
            price,
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&lines);
        return Ok(());
    }

    ctx.output.header("Products");
    for line in &lines {
        ctx.output.list_item(&format!(
            "[{}] {} ({}) - {}",
            line.id, line.name, line.category, line.price
        ));
    }

    Ok(())
}
