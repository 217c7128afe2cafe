//! Shop CLI - Command line tool for the storefront cart.
//!
//! Commands:
//! - `shop products` - List the catalog
//! - `shop add` - Add a product to the cart
//! - `shop inc` / `shop dec` - Change a line item's quantity by one
//! - `shop remove` - Remove a line item
//! - `shop clear` - Empty the cart
//! - `shop show` - Show the cart and totals
//! - `shop checkout` - Build the messaging link for the order
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shop_cart::locale::Locale;
use tracing_subscriber::EnvFilter;

use commands::{CheckoutArgs, ClearArgs, ConfigArgs, ItemArgs, ProductsArgs};

/// Shop CLI - Manage a storefront shopping cart
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Display language (en, mm)
    #[arg(short, long, global = true)]
    lang: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Products(ProductsArgs),

    /// Add a product to the cart
    Add(ItemArgs),

    /// Increase a line item's quantity by one
    Inc(ItemArgs),

    /// Decrease a line item's quantity by one
    Dec(ItemArgs),

    /// Remove a line item
    Remove(ItemArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Show the cart
    Show,

    /// Build the checkout link for the current cart
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.lang, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Inc(args) => commands::cart::change(args, 1, &ctx),
        Commands::Dec(args) => commands::cart::change(args, -1, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Clear(args) => commands::cart::clear(args, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Library logs go to stderr; `RUST_LOG` overrides the level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
