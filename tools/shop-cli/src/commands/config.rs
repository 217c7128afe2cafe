//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("language", ctx.config.language.code());
    ctx.output.kv("active language", ctx.locale.code());

    let cart = &ctx.config.cart;
    ctx.output.plain("");
    ctx.output.plain("[cart]");
    ctx.output.kv("storage_key", &cart.storage_key);
    ctx.output.kv("currency", cart.currency.code());
    ctx.output.kv("shop_name", &cart.shop_name);
    if let Some(ref name) = cart.shop_name_mm {
        ctx.output.kv("shop_name_mm", name);
    }
    ctx.output.kv("messenger_url", &cart.messenger_url);

    ctx.output.plain("");
    ctx.output.plain("[storage]");
    ctx.output.kv("dir", &ctx.storage_dir().display().to_string());

    let catalog = ctx.catalog();
    ctx.output.plain("");
    ctx.output.plain(&format!("Products: {}", catalog.len()));
    for category in catalog.categories() {
        ctx.output.list_item(category);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shop.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
