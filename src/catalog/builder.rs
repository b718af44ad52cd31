//! Catalog Builder

use rusty_money::iso::Currency;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::{
    catalog::{Catalog, CatalogError},
    variants::{NewVariant, Variant},
};

/// Assembles a [`Catalog`], minting a unique key for every variant pushed.
#[derive(Debug)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Create an empty builder for a catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            catalog: Catalog {
                variants: Vec::new(),
                positions: SlotMap::with_key(),
                slugs: FxHashMap::default(),
                currency,
            },
        }
    }

    /// Append a variant to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateSlug`] if a variant with the same slug was already pushed.
    pub fn push(&mut self, variant: NewVariant) -> Result<&mut Self, CatalogError> {
        if self.catalog.slugs.contains_key(&variant.slug) {
            return Err(CatalogError::DuplicateSlug(variant.slug));
        }

        let catalog = &mut self.catalog;
        let key = catalog.positions.insert(catalog.variants.len());

        catalog.slugs.insert(variant.slug.clone(), key);
        catalog.variants.push(Variant::from_new(key, variant));

        Ok(self)
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency
    }

    /// Finish building. The catalog is immutable from here on.
    pub fn build(self) -> Catalog {
        self.catalog
    }
}
