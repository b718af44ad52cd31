//! Cart Lines

use crate::{
    prices::Price,
    variants::{Variant, VariantKey},
};

/// One variant and its selected quantity.
///
/// Display fields and the unit price are copied from the variant when the line
/// is created, so totals stay stable even if the catalog were to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    variant: VariantKey,
    name: String,
    image: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    /// Creates a line holding a single unit of `variant`.
    pub(crate) fn new(variant: &Variant) -> Self {
        Self {
            variant: variant.key(),
            name: variant.name().to_string(),
            image: variant.image().to_string(),
            unit_price: variant.unit_price(),
            quantity: 1,
        }
    }

    /// Returns the key of the variant on this line
    pub fn variant(&self) -> VariantKey {
        self.variant
    }

    /// Returns the variant name captured when the line was created
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image reference captured when the line was created
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the unit price captured when the line was created
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns the quantity. Always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `quantity * unit_price`
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity > 0, "cart lines must hold at least one unit");

        self.quantity = quantity.max(1);
    }
}
