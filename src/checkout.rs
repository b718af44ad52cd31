//! Checkout

use crate::{
    cart::{Cart, CartLine},
    prices::Price,
};

/// Immutable snapshot of a cart handed to "place order".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSnapshot {
    lines: Vec<CartLine>,
    item_count: u64,
    total_price: Price,
}

impl CheckoutSnapshot {
    /// Lines in cart order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Total price of all lines
    pub fn total_price(&self) -> Price {
        self.total_price
    }
}

impl Cart {
    /// Snapshot the cart for checkout. Returns `None` for an empty cart.
    ///
    /// The cart itself is left untouched.
    pub fn checkout(&self) -> Option<CheckoutSnapshot> {
        if self.is_empty() {
            return None;
        }

        Some(CheckoutSnapshot {
            lines: self.lines().to_vec(),
            item_count: self.total_item_count(),
            total_price: self.total_price(),
        })
    }
}
