//! FluxTrade CLI - Command-line shopping demo.
//!
//! Drives the state stores the way the storefront screens would: browse the
//! catalog, fill the cart, manage the wishlist, place orders, and walk them
//! through fulfillment. All state lives in the configured data directory
//! (see `FLUXTRADE_DATA_DIR`), so sessions survive across invocations.
//!
//! # Usage
//!
//! ```bash
//! # Sign in and shop
//! ft-cli auth login -r user -e mia.bennett@example.test
//! ft-cli catalog list --limit 10
//! ft-cli cart add 1 --quantity 2
//! ft-cli cart show
//!
//! # Check out and track
//! ft-cli order place --payment "Visa 4242" --name "Mia Bennett" \
//!     --line1 "123 Waverly Ave" --city "Quezon City" --region "Metro Manila" \
//!     --postal-code 1105 --country Philippines --contact "+63 917 555 2103"
//! ft-cli order list
//! ft-cli order advance <order-id> shipped --note "Handed off to courier"
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "ft-cli")]
#[command(author, version, about = "FluxTrade command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: commands::wishlist::WishlistAction,
    },
    /// Place and track orders
    Order {
        #[command(subcommand)]
        action: commands::orders::OrderAction,
    },
    /// Manage the auth session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() {
    // Initialize tracing; default to warnings so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fluxtrade_store=warn,fluxtrade_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Context::from_env()?;

    match cli.command {
        Commands::Catalog { action } => commands::catalog::run(&ctx, &action),
        Commands::Cart { action } => commands::cart::run(&mut ctx, &action),
        Commands::Wishlist { action } => commands::wishlist::run(&mut ctx, &action),
        Commands::Order { action } => commands::orders::run(&mut ctx, action)?,
        Commands::Auth { action } => commands::auth::run(&mut ctx, action),
    }
    Ok(())
}
