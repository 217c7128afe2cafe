//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;

use clap::{Args, Subcommand};
use shop_cart::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list products in this category.
    #[arg(short = 'k', long)]
    pub category: Option<String>,
}

/// Arguments for commands that act on one product.
#[derive(Args)]
pub struct ItemArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Also print the order message the link carries.
    #[arg(short = 'm', long)]
    pub print_message: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a starter shop.toml in the current directory
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
