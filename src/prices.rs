//! Prices

use std::{fmt, iter::Sum, ops::Deref};

use rusty_money::{Money, iso::Currency};

/// Represents a non-negative price in minor units (kopecks, pence, cents).
///
/// Arithmetic saturates at `u64::MAX` so aggregates never panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price::new(self.value.saturating_mul(u64::from(quantity)))
    }

    /// Adds two prices, saturating on overflow.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Price::new(self.value.saturating_add(other.value))
    }

    /// Converts the price into money of the given currency.
    ///
    /// Amounts beyond `i64::MAX` minor units are clamped.
    pub fn to_money(self, currency: &'static Currency) -> Money<'static, Currency> {
        let minor = i64::try_from(self.value).unwrap_or(i64::MAX);

        Money::from_minor(minor, currency)
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
