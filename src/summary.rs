//! Cart Summary
//!
//! Plain-text rendering of a cart for terminals. Prices are formatted with the
//! catalog currency here and nowhere else.

use std::io;

use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur when writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Renders a cart's lines and totals.
#[derive(Debug, Clone, Copy)]
pub struct CartSummary<'a> {
    cart: &'a Cart,
    currency: &'static Currency,
}

impl<'a> CartSummary<'a> {
    /// Create a summary for `cart`, formatting prices in `currency`.
    pub fn new(cart: &'a Cart, currency: &'static Currency) -> Self {
        Self { cart, currency }
    }

    /// Writes the summary table and totals.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::IO`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        if self.cart.is_empty() {
            return writeln!(out, "Cart is empty").map_err(|_err| SummaryError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Unit Price", "Qty", "Line Total"]);

        for (idx, line) in self.cart.iter().enumerate() {
            builder.push_record([
                format!("{}", idx + 1),
                line.name().to_string(),
                line.unit_price().to_money(self.currency).to_string(),
                line.quantity().to_string(),
                line.line_total().to_money(self.currency).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}").map_err(|_err| SummaryError::IO)?;
        writeln!(out, " Items: {}", self.cart.total_item_count())
            .map_err(|_err| SummaryError::IO)?;
        writeln!(
            out,
            " Total: {}",
            self.cart.total_price().to_money(self.currency)
        )
        .map_err(|_err| SummaryError::IO)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::{
        catalog::{Catalog, CatalogProvider},
        prices::Price,
        variants::NewVariant,
    };

    use super::*;

    #[test]
    fn empty_cart_renders_placeholder() -> TestResult {
        let cart = Cart::new();
        let mut out = Vec::new();

        CartSummary::new(&cart, GBP).write_to(&mut out)?;

        assert_eq!(String::from_utf8(out)?, "Cart is empty\n");

        Ok(())
    }

    #[test]
    fn renders_lines_and_totals() -> TestResult {
        let mut builder = Catalog::builder(GBP);
        builder
            .push(NewVariant::new("cherry", "Cherry", Price::new(320)))?
            .push(NewVariant::new("beef", "Beefsteak", Price::new(450)))?;
        let catalog = builder.build();

        let mut cart = Cart::new();
        cart.add_item(catalog.find_by_slug("cherry")?);
        cart.add_item(catalog.find_by_slug("beef")?);
        cart.add_item(catalog.find_by_slug("cherry")?);

        let mut out = Vec::new();
        CartSummary::new(&cart, GBP).write_to(&mut out)?;
        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Cherry"), "missing cherry row: {rendered}");
        assert!(rendered.contains("Beefsteak"), "missing beef row: {rendered}");
        assert!(rendered.contains("£6.40"), "missing line total: {rendered}");
        assert!(rendered.contains(" Items: 3"), "missing item count: {rendered}");
        assert!(rendered.contains(" Total: £10.90"), "missing total: {rendered}");

        Ok(())
    }

    #[test]
    fn write_errors_surface_as_io() {
        struct FailingWriter;

        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = CartSummary::new(&Cart::new(), GBP).write_to(FailingWriter);

        assert!(matches!(result, Err(SummaryError::IO)));
    }
}
