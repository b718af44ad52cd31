//! Cart
//!
//! The cart aggregation engine. A [`Cart`] holds at most one [`CartLine`] per
//! variant, in the order variants were first added, and every line has a
//! quantity of at least one.
//!
//! None of the operations fail. Adding an unavailable variant, editing a line
//! that does not exist, or setting a non-positive quantity are normalised into
//! no-ops or removals.

use tracing::debug;

use crate::{
    prices::Price,
    variants::{Variant, VariantKey},
};

pub mod lines;

pub use lines::CartLine;

/// Whether a cart holds any lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// No lines
    Empty,

    /// At least one line
    Populated,
}

/// Cart
///
/// Lines are identified by [`VariantKey`] alone, and keys are only unique within
/// the catalog that minted them. A cart must only be fed variants and keys from
/// a single catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `variant`.
    ///
    /// Increments the existing line for the variant, or appends a new line with
    /// a quantity of one. Unavailable variants are ignored.
    pub fn add_item(&mut self, variant: &Variant) {
        if !variant.is_available() {
            debug!(variant = ?variant.key(), "ignoring add of unavailable variant");

            return;
        }

        if let Some(line) = self.line_mut(variant.key()) {
            line.increment();

            debug!(variant = ?variant.key(), quantity = line.quantity(), "incremented cart line");

            return;
        }

        self.lines.push(CartLine::new(variant));

        debug!(variant = ?variant.key(), lines = self.lines.len(), "added cart line");
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Lines are never created here
    /// and never move.
    pub fn set_quantity(&mut self, key: VariantKey, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);

            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.line_mut(key) {
            Some(line) => {
                line.set_quantity(quantity);

                debug!(variant = ?key, quantity, "set cart line quantity");
            }
            None => debug!(variant = ?key, "ignoring quantity change for missing line"),
        }
    }

    /// Remove the line for `key`, if there is one.
    pub fn remove_item(&mut self, key: VariantKey) {
        match self.position(key) {
            Some(position) => {
                self.lines.remove(position);

                debug!(variant = ?key, lines = self.lines.len(), "removed cart line");
            }
            None => debug!(variant = ?key, "ignoring removal of missing line"),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities over all lines.
    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Sum of line totals, using the unit price captured on each line.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// The line for `key`, if any.
    pub fn line(&self, key: VariantKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.variant() == key)
    }

    /// Number of distinct variants in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current macro-state of the cart.
    pub fn state(&self) -> CartState {
        if self.is_empty() {
            CartState::Empty
        } else {
            CartState::Populated
        }
    }

    fn position(&self, key: VariantKey) -> Option<usize> {
        self.lines.iter().position(|line| line.variant() == key)
    }

    fn line_mut(&mut self, key: VariantKey) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.variant() == key)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::RUB;
    use testresult::TestResult;

    use crate::{
        catalog::{Catalog, CatalogError, CatalogProvider},
        variants::NewVariant,
    };

    use super::*;

    fn test_catalog() -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder(RUB);

        builder
            .push(NewVariant::new("a", "A", Price::new(320)))?
            .push(NewVariant::new("b", "B", Price::new(450)))?
            .push(NewVariant::new("c", "C", Price::new(520)).unavailable())?;

        Ok(builder.build())
    }

    fn quantities(cart: &Cart) -> Vec<(VariantKey, u32)> {
        cart.iter()
            .map(|line| (line.variant(), line.quantity()))
            .collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn add_item_creates_then_increments() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(a);

        assert_eq!(quantities(&cart), [(a.key(), 2)]);
        assert_eq!(cart.state(), CartState::Populated);

        Ok(())
    }

    #[test]
    fn add_item_appends_new_variants() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let b = catalog.find_by_slug("b")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(b);
        cart.add_item(a);

        assert_eq!(quantities(&cart), [(a.key(), 2), (b.key(), 1)]);
        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), Price::new(1090));

        Ok(())
    }

    #[test]
    fn add_item_ignores_unavailable_variant() -> TestResult {
        let catalog = test_catalog()?;
        let c = catalog.find_by_slug("c")?;
        let mut cart = Cart::new();

        cart.add_item(c);
        cart.add_item(c);

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);

        Ok(())
    }

    #[test]
    fn set_quantity_overwrites_without_reordering() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let b = catalog.find_by_slug("b")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(b);
        cart.set_quantity(a.key(), 5);

        assert_eq!(quantities(&cart), [(a.key(), 5), (b.key(), 1)]);
        assert_eq!(cart.total_price(), Price::new(5 * 320 + 450));

        Ok(())
    }

    #[test]
    fn set_quantity_non_positive_removes() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let b = catalog.find_by_slug("b")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(b);
        cart.set_quantity(a.key(), 0);
        cart.set_quantity(b.key(), -3);

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn set_quantity_never_creates_lines() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let mut cart = Cart::new();

        cart.set_quantity(a.key(), 4);

        assert!(cart.is_empty());
        assert!(cart.line(a.key()).is_none());

        Ok(())
    }

    #[test]
    fn set_quantity_clamps_huge_values() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.set_quantity(a.key(), i64::MAX);

        assert_eq!(cart.line(a.key()).map(CartLine::quantity), Some(u32::MAX));

        Ok(())
    }

    #[test]
    fn remove_item_keeps_order_of_remaining_lines() -> TestResult {
        let catalog = test_catalog()?;
        let a = catalog.find_by_slug("a")?;
        let b = catalog.find_by_slug("b")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(b);
        cart.remove_item(a.key());

        assert_eq!(quantities(&cart), [(b.key(), 1)]);

        cart.add_item(a);

        assert_eq!(quantities(&cart), [(b.key(), 1), (a.key(), 1)]);

        Ok(())
    }

    #[test]
    fn remove_item_missing_key_is_noop() {
        let mut cart = Cart::new();

        cart.remove_item(VariantKey::default());

        assert!(cart.is_empty());
    }

    #[test]
    fn keys_from_separate_catalogs_collide() -> TestResult {
        let first = test_catalog()?;
        let second = test_catalog()?;
        let a = first.find_by_slug("a")?;
        let also_a = second.find_by_slug("a")?;
        let mut cart = Cart::new();

        cart.add_item(a);
        cart.add_item(also_a);

        assert_eq!(a.key(), also_a.key());
        assert_eq!(quantities(&cart), [(a.key(), 2)]);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let catalog = test_catalog()?;
        let mut cart = Cart::new();

        cart.add_item(catalog.find_by_slug("a")?);
        cart.clear();

        assert_eq!(cart.state(), CartState::Empty);

        Ok(())
    }
}
