//! Session
//!
//! Resolves user intents expressed as variant slugs against a catalog and
//! forwards them to the cart. This is the layer that turns a catalog miss into
//! an error; the cart itself never fails.

use tracing::info;

use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError, CatalogProvider},
    checkout::CheckoutSnapshot,
};

/// A single visitor's catalog view and cart.
#[derive(Debug)]
pub struct Session<P: CatalogProvider = Catalog> {
    catalog: P,
    cart: Cart,
}

impl<P: CatalogProvider> Session<P> {
    /// Start a session with an empty cart.
    pub fn new(catalog: P) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// The catalog backing this session.
    pub fn catalog(&self) -> &P {
        &self.catalog
    }

    /// The session's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of the variant with the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if the slug is not in the catalog.
    pub fn add(&mut self, slug: &str) -> Result<(), CatalogError> {
        let variant = self.catalog.find_by_slug(slug)?;

        self.cart.add_item(variant);

        Ok(())
    }

    /// Set the quantity of the line for the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if the slug is not in the catalog.
    pub fn set_quantity(&mut self, slug: &str, quantity: i64) -> Result<(), CatalogError> {
        let key = self.catalog.find_by_slug(slug)?.key();

        self.cart.set_quantity(key, quantity);

        Ok(())
    }

    /// Remove the line for the given slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if the slug is not in the catalog.
    pub fn remove(&mut self, slug: &str) -> Result<(), CatalogError> {
        let key = self.catalog.find_by_slug(slug)?.key();

        self.cart.remove_item(key);

        Ok(())
    }

    /// Place an order for the current cart contents.
    ///
    /// Checkout is not implemented beyond producing the snapshot; the cart is
    /// left as it is.
    pub fn place_order(&self) -> Option<CheckoutSnapshot> {
        let snapshot = self.cart.checkout()?;

        info!(
            lines = snapshot.lines().len(),
            items = snapshot.item_count(),
            total = *snapshot.total_price(),
            "order placed"
        );

        Some(snapshot)
    }
}
