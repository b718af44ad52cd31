//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{
    catalog::{Catalog, CatalogError},
    session::Session,
};

/// Arguments for the storefront demo
///
/// Commands are applied in groups: adds first, then quantity edits, then removals.
#[derive(Debug, Parser)]
pub struct StorefrontArgs {
    /// Catalog fixture file; defaults to the built-in red-garden catalog
    #[clap(short, long)]
    pub catalog: Option<PathBuf>,

    /// Add one unit of the variant with this slug (repeatable)
    #[clap(short, long = "add", value_name = "SLUG")]
    pub add: Vec<String>,

    /// Set a line's quantity, e.g. `cherry=3` (repeatable)
    #[clap(short, long = "set", value_name = "SLUG=QTY", value_parser = parse_quantity_edit)]
    pub set: Vec<QuantityEdit>,

    /// Remove the line for this slug (repeatable)
    #[clap(short, long = "remove", value_name = "SLUG")]
    pub remove: Vec<String>,

    /// Place an order for the resulting cart
    #[clap(long)]
    pub checkout: bool,
}

/// A `SLUG=QTY` quantity edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEdit {
    /// Variant slug
    pub slug: String,

    /// Requested quantity; zero or less removes the line
    pub quantity: i64,
}

/// Parse a `SLUG=QTY` argument.
///
/// # Errors
///
/// Returns a message if the argument has no `=` or the quantity is not an integer.
pub fn parse_quantity_edit(s: &str) -> Result<QuantityEdit, String> {
    let (slug, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SLUG=QTY, got: {s}"))?;

    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid quantity in {s}: {err}"))?;

    Ok(QuantityEdit {
        slug: slug.trim().to_string(),
        quantity,
    })
}

impl StorefrontArgs {
    /// Load the selected catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fixture cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path),
            None => Catalog::red_garden(),
        }
    }

    /// Replay the requested cart commands against a session.
    ///
    /// # Errors
    ///
    /// Returns an error if any command names a slug that is not in the catalog.
    pub fn apply(&self, session: &mut Session) -> Result<(), CatalogError> {
        for slug in &self.add {
            session.add(slug)?;
        }

        for edit in &self.set {
            session.set_quantity(&edit.slug, edit.quantity)?;
        }

        for slug in &self.remove {
            session.remove(slug)?;
        }

        Ok(())
    }
}
