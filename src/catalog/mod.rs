//! Catalog
//!
//! An immutable, ordered set of [`Variant`]s, loaded once before any cart
//! operation and looked up by [`VariantKey`] or slug.

use rusty_money::iso::Currency;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::variants::{Variant, VariantKey};

pub mod builder;
pub mod fixtures;

pub use builder::CatalogBuilder;

/// Errors related to catalog construction and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No variant with the given key exists in the catalog.
    #[error("Variant not found: {0:?}")]
    VariantNotFound(VariantKey),

    /// No variant with the given slug exists in the catalog.
    #[error("Variant not found: {0}")]
    SlugNotFound(String),

    /// Two variants share the same slug.
    #[error("Duplicate variant slug: {0}")]
    DuplicateSlug(String),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between variants
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The fixture defines no variants, so currency could not be determined.
    #[error("Catalog has no variants; currency unknown")]
    NoVariants,

    /// IO error reading fixture files
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Read-only source of variants.
pub trait CatalogProvider {
    /// All variants, in catalog order.
    fn list_variants(&self) -> &[Variant];

    /// Find a variant by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VariantNotFound`] if the key was never part of this catalog.
    fn find_variant(&self, key: VariantKey) -> Result<&Variant, CatalogError>;

    /// Find a variant by its fixture slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugNotFound`] if no variant has this slug.
    fn find_by_slug(&self, slug: &str) -> Result<&Variant, CatalogError>;
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Variants in catalog order
    variants: Vec<Variant>,

    /// Variant key -> position in `variants`
    positions: SlotMap<VariantKey, usize>,

    /// Slug -> variant key
    slugs: FxHashMap<String, VariantKey>,

    /// Currency all prices are expressed in
    currency: &'static Currency,
}

impl Catalog {
    /// Start building a catalog priced in the given currency.
    pub fn builder(currency: &'static Currency) -> CatalogBuilder {
        CatalogBuilder::new(currency)
    }

    /// Currency all prices are expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of variants in the catalog.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the catalog has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variants that can currently be added to a cart, in catalog order.
    pub fn available_variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter().filter(|variant| variant.is_available())
    }
}

impl CatalogProvider for Catalog {
    fn list_variants(&self) -> &[Variant] {
        &self.variants
    }

    fn find_variant(&self, key: VariantKey) -> Result<&Variant, CatalogError> {
        self.positions
            .get(key)
            .and_then(|&position| self.variants.get(position))
            .ok_or(CatalogError::VariantNotFound(key))
    }

    fn find_by_slug(&self, slug: &str) -> Result<&Variant, CatalogError> {
        let key = self
            .slugs
            .get(slug)
            .ok_or_else(|| CatalogError::SlugNotFound(slug.to_string()))?;

        self.find_variant(*key)
    }
}
