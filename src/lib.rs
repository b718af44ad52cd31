//! Storefront
//!
//! Catalog and cart aggregation engine for a single-page storefront. A fixed
//! [`catalog::Catalog`] of variants is loaded once; a [`cart::Cart`] turns
//! add, set-quantity and remove events into an ordered set of lines with
//! derived item counts and totals.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod prelude;
pub mod prices;
pub mod session;
pub mod summary;
pub mod utils;
pub mod variants;
