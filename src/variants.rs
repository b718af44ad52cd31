//! Variants

use slotmap::new_key_type;
use smallvec::SmallVec;

use crate::prices::Price;

new_key_type! {
    /// Variant Key
    pub struct VariantKey;
}

/// Descriptive facets of a variant. Never used by cart logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantAttributes {
    /// Taste description
    pub taste: String,

    /// Size description
    pub size: String,

    /// Harvest season
    pub season: String,

    /// Intended uses
    pub uses: SmallVec<[String; 5]>,
}

/// Variant data before it has been assigned a key by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVariant {
    /// Stable string key, unique within the catalog
    pub slug: String,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Price of a single unit
    pub unit_price: Price,

    /// Opaque image reference
    pub image: String,

    /// Descriptive attributes
    pub attributes: VariantAttributes,

    /// Whether the variant can be added to a cart
    pub available: bool,
}

impl NewVariant {
    /// Creates an available variant with the given slug, name and price.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            unit_price,
            image: String::new(),
            attributes: VariantAttributes::default(),
            available: true,
        }
    }

    /// Marks the variant as out of stock.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    key: VariantKey,
    slug: String,
    name: String,
    description: String,
    unit_price: Price,
    image: String,
    attributes: VariantAttributes,
    available: bool,
}

impl Variant {
    pub(crate) fn from_new(key: VariantKey, variant: NewVariant) -> Self {
        let NewVariant {
            slug,
            name,
            description,
            unit_price,
            image,
            attributes,
            available,
        } = variant;

        Self {
            key,
            slug,
            name,
            description,
            unit_price,
            image,
            attributes,
            available,
        }
    }

    /// Returns the key of the variant
    pub fn key(&self) -> VariantKey {
        self.key
    }

    /// Returns the fixture slug of the variant
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the image reference
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the descriptive attributes
    pub fn attributes(&self) -> &VariantAttributes {
        &self.attributes
    }

    /// Returns whether the variant can be added to a cart
    pub fn is_available(&self) -> bool {
        self.available
    }
}
