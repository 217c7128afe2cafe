//! Cart commands: add, inc/dec, remove, clear and show.

use anyhow::Result;
use dialoguer::Confirm;
use shop_cart::locale::Message;
use shop_cart::page::{CartEvent, Outcome};
use shop_cart::view::CartRender;
use shop_cart::ProductId;

use super::{ClearArgs, ItemArgs};
use crate::context::Context;

/// Add one of a catalog product to the cart.
pub fn add(args: ItemArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog.require(args.id)?.clone();

    let mut page = ctx.open_page()?;
    let outcome = page.handle(CartEvent::Add(product))?;
    report(&outcome, ctx);
    Ok(())
}

/// Change a line item's quantity by `delta`.
pub fn change(args: ItemArgs, delta: i64, ctx: &Context) -> Result<()> {
    let mut page = ctx.open_page()?;
    if page.cart().get(args.id).is_none() {
        not_in_cart(args.id, ctx);
        return Ok(());
    }

    let event = if delta > 0 {
        CartEvent::Increment(args.id)
    } else {
        CartEvent::Decrement(args.id)
    };
    let outcome = page.handle(event)?;
    report(&outcome, ctx);
    Ok(())
}

/// Remove a line item.
pub fn remove(args: ItemArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.open_page()?;
    if page.cart().get(args.id).is_none() {
        not_in_cart(args.id, ctx);
        return Ok(());
    }

    let outcome = page.handle(CartEvent::Remove(args.id))?;
    report(&outcome, ctx);
    Ok(())
}

/// Empty the cart after confirmation.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.open_page()?;
    if page.cart().is_empty() {
        ctx.output.info(&Message::CartEmpty.text(ctx.locale));
        if ctx.output.is_json() {
            ctx.output.json(&page.render()?);
        }
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(Message::ConfirmClear.text(ctx.locale))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    let outcome = page.handle(CartEvent::Clear)?;
    report(&outcome, ctx);
    Ok(())
}

/// Show the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let page = ctx.open_page()?;
    let render = page.render()?;

    if ctx.output.is_json() {
        ctx.output.json(&render);
        return Ok(());
    }

    print_render(&render, ctx);
    Ok(())
}

fn report(outcome: &Outcome, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(outcome);
        return;
    }

    if let Some(notice) = &outcome.notice {
        ctx.output.notice(notice);
    }
    print_render(&outcome.render, ctx);
}

fn not_in_cart(id: ProductId, ctx: &Context) {
    tracing::debug!(%id, "product not in cart");
    ctx.output.warn(&format!("Product {} is not in the cart", id));
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "missing": id }));
    }
}

fn print_render(render: &CartRender, ctx: &Context) {
    let (rows, summary) = match render {
        CartRender::Empty => {
            ctx.output.info(&Message::CartEmpty.text(ctx.locale));
            return;
        }
        CartRender::Items { rows, summary } => (rows, summary),
    };

    let ids: Vec<String> = rows.iter().map(|r| r.id.to_string()).collect();
    let quantities: Vec<String> = rows.iter().map(|r| r.quantity.to_string()).collect();
    let lines: Vec<[&str; 6]> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            [
                ids[i].as_str(),
                row.name.as_str(),
                row.category.as_str(),
                row.unit_price.as_str(),
                quantities[i].as_str(),
                row.line_total.as_str(),
            ]
        })
        .collect();

    let header = ["ID", "Item", "Category", "Price", "Qty", "Subtotal"];
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for line in &lines {
        for (width, col) in widths.iter_mut().zip(line) {
            *width = (*width).max(col.chars().count());
        }
    }

    ctx.output.header(&format!("Cart ({})", summary.item_count));
    ctx.output.table_row(&header, &widths);
    for line in &lines {
        ctx.output.table_row(line, &widths);
    }

    ctx.output.plain("");
    ctx.output.kv("Subtotal", &summary.subtotal);
    ctx.output.kv("Total", &summary.total);
}

