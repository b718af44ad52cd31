//! Storefront Example
//!
//! Loads a catalog, replays cart commands and prints the cart.
//!
//! Use `-c` to load a catalog fixture file instead of the built-in one
//! Use `-a`, `-s` and `-r` to add, set the quantity of, or remove a variant by slug
//! Use `--checkout` to place an order for the resulting cart

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront::{
    catalog::CatalogProvider, session::Session, summary::CartSummary, utils::StorefrontArgs,
};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = StorefrontArgs::parse();
    let catalog = args.load_catalog()?;

    println!("Catalog ({}):", catalog.currency().iso_alpha_code);

    for variant in catalog.list_variants() {
        let stock = if variant.is_available() {
            ""
        } else {
            " (out of stock)"
        };

        println!(
            "  {:<12} {:<18} {}{stock}",
            variant.slug(),
            variant.name(),
            variant.unit_price().to_money(catalog.currency()),
        );
    }

    let currency = catalog.currency();
    let mut session = Session::new(catalog);

    args.apply(&mut session)?;

    println!();
    CartSummary::new(session.cart(), currency).write_to(io::stdout().lock())?;

    if args.checkout {
        match session.place_order() {
            Some(order) => println!(
                "\nOrder placed: {} items, {}",
                order.item_count(),
                order.total_price().to_money(currency)
            ),
            None => println!("\nNothing to order"),
        }
    }

    Ok(())
}
