//! Catalog Fixtures
//!
//! Catalogs are described in YAML, one file per set under `fixtures/catalog/`:
//!
//! ```yaml
//! variants:
//!   - slug: cherry
//!     name: Cherry tomatoes
//!     price: "320 RUB"
//!     available: true
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, RUB, USD};
use serde::Deserialize;
use smallvec::SmallVec;
use tracing::info;

use crate::{
    catalog::{Catalog, CatalogBuilder, CatalogError},
    prices::Price,
    variants::{NewVariant, VariantAttributes},
};

/// Default directory for catalog fixture sets.
pub const FIXTURES_DIR: &str = "./fixtures/catalog";

/// The storefront's own catalog, embedded at build time.
const RED_GARDEN: &str = include_str!("../../fixtures/catalog/red-garden.yml");

/// Wrapper for variants in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Variants, in display order
    pub variants: Vec<VariantFixture>,
}

/// Variant Fixture
#[derive(Debug, Deserialize)]
pub struct VariantFixture {
    /// Stable string key
    pub slug: String,

    /// Variant name
    pub name: String,

    /// Variant description
    #[serde(default)]
    pub description: String,

    /// Unit price (e.g., "320 RUB")
    pub price: String,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Descriptive attributes
    #[serde(default)]
    pub attributes: AttributesFixture,

    /// Whether the variant is in stock
    #[serde(default = "in_stock")]
    pub available: bool,
}

/// Attributes Fixture
#[derive(Debug, Default, Deserialize)]
pub struct AttributesFixture {
    /// Taste description
    #[serde(default)]
    pub taste: String,

    /// Size description
    #[serde(default)]
    pub size: String,

    /// Harvest season
    #[serde(default)]
    pub season: String,

    /// Intended uses
    #[serde(default)]
    pub uses: Vec<String>,
}

fn in_stock() -> bool {
    true
}

impl VariantFixture {
    fn into_new_variant(self, unit_price: Price) -> NewVariant {
        let AttributesFixture {
            taste,
            size,
            season,
            uses,
        } = self.attributes;

        NewVariant {
            slug: self.slug,
            name: self.name,
            description: self.description,
            unit_price,
            image: self.image,
            attributes: VariantAttributes {
                taste,
                size,
                season,
                uses: uses.into_iter().collect::<SmallVec<[String; 5]>>(),
            },
            available: self.available,
        }
    }
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = CatalogError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let mut builder: Option<CatalogBuilder> = None;

        for variant_fixture in fixture.variants {
            let (minor_units, currency) = parse_price(&variant_fixture.price)?;

            let builder = builder.get_or_insert_with(|| CatalogBuilder::new(currency));
            let expected = builder.currency();

            if expected != currency {
                return Err(CatalogError::CurrencyMismatch(
                    expected.iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }

            builder.push(variant_fixture.into_new_variant(Price::new(minor_units)))?;
        }

        builder
            .map(CatalogBuilder::build)
            .ok_or(CatalogError::NoVariants)
    }
}

impl Catalog {
    /// Parse a catalog from YAML fixture contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is invalid, currencies
    /// differ between variants, slugs repeat, or no variants are defined.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let catalog = Catalog::try_from(fixture)?;

        info!(
            variants = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load a named fixture set from [`FIXTURES_DIR`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, CatalogError> {
        Self::from_path(Path::new(FIXTURES_DIR).join(format!("{name}.yml")))
    }

    /// The storefront's built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded fixture is invalid.
    pub fn red_garden() -> Result<Self, CatalogError> {
        Self::from_yaml(RED_GARDEN)
    }
}

/// Parse price string (e.g., "320 RUB" or "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, if it is finer than the
/// currency's minor unit (e.g., "3.005 GBP"), or if the currency code is not
/// recognized.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "RUB" => RUB,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CatalogError::InvalidPrice(s.to_string()));
    }

    // Sub-minor-unit amounts cannot be represented.
    if amount.round_dp(currency.exponent) != amount {
        return Err(CatalogError::InvalidPrice(s.to_string()));
    }

    let minor_units = 10_u64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.to_u64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
