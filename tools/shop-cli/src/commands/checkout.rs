//! Checkout: build the messaging link for the current cart.

use anyhow::Result;
use shop_cart::page::CartEvent;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
///
/// The cart is left as it is; the shopper still has to send the message.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.open_page()?;
    let outcome = page.handle(CartEvent::Checkout)?;

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    if let Some(notice) = &outcome.notice {
        ctx.output.notice(notice);
    }

    let Some(link) = outcome.link else {
        return Ok(());
    };

    ctx.output.debug(&format!("Endpoint: {}", page.handoff().endpoint()));
    if args.print_message {
        ctx.output.header("Message");
        ctx.output.plain(&link.message);
        ctx.output.plain("");
    }
    ctx.output.plain(&link.url);

    Ok(())
}
