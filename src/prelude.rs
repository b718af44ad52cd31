//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, CartState},
    catalog::{Catalog, CatalogBuilder, CatalogError, CatalogProvider, fixtures::parse_price},
    checkout::CheckoutSnapshot,
    prices::Price,
    session::Session,
    summary::{CartSummary, SummaryError},
    variants::{NewVariant, Variant, VariantAttributes, VariantKey},
};
