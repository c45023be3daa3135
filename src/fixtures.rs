//! Catalog fixtures
//!
//! YAML-defined catalogs for demos and tests: a currency code, a product
//! list and a coupon list, built into a registered [`Inventory`].

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    coupons::CouponOffer,
    inventory::{Inventory, InventoryError},
    promotions::Promotion,
};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price or amount format
    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Registration rejected by the inventory
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// A whole catalog in YAML form.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO currency code shared by every price in the catalog
    pub currency: String,

    /// Products to register, in order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Coupons to register, in order
    #[serde(default)]
    pub coupons: Vec<CouponFixture>,
}

/// One product entry from YAML.
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price as a decimal string (e.g. `"2.79"`)
    pub price: String,

    /// Optional promotion configuration
    #[serde(default)]
    pub promotion: Option<PromotionFixture>,
}

/// Promotion configuration from YAML.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// Every `frequency`-th unit is free
    GetOneFree {
        /// Units bought per free unit
        frequency: u32,
    },

    /// A percentage off every whole package
    Package {
        /// Units per package
        size: u32,

        /// Whole percentage off packaged units
        percent: u32,
    },

    /// A percentage off every unit past a threshold
    Threshold {
        /// Units paid at full price
        threshold: u32,

        /// Whole percentage off units above the threshold
        percent: u32,
    },
}

/// Coupon configuration from YAML.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponFixture {
    /// A whole percentage off the subtotal
    Percent {
        /// Coupon name
        name: String,

        /// Whole percentage off the subtotal
        percent: u32,
    },

    /// A flat amount off the subtotal
    Amount {
        /// Coupon name
        name: String,

        /// Amount as a decimal string (e.g. `"5.00"`)
        amount: String,
    },
}

impl CatalogFixture {
    /// Parse a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document does not match the
    /// fixture schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Read and parse a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::from_yaml(&fs::read_to_string(path)?)
    }

    /// Register everything in this catalog into a fresh inventory.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] for an unknown currency code, a malformed
    /// amount, or a registration the inventory rejects.
    pub fn build(&self) -> Result<Inventory, FixtureError> {
        let mut inventory = Inventory::new(parse_currency(&self.currency)?);

        for product in &self.products {
            let promotion = product
                .promotion
                .as_ref()
                .map_or(Promotion::None, PromotionFixture::to_promotion);

            inventory.register(&product.name, parse_amount(&product.price)?, promotion)?;
        }

        for coupon in &self.coupons {
            match coupon {
                CouponFixture::Percent { name, percent } => {
                    inventory.register_coupon(name, CouponOffer::Percent(*percent))?;
                }
                CouponFixture::Amount { name, amount } => {
                    inventory.register_coupon(name, CouponOffer::Amount(parse_amount(amount)?))?;
                }
            }
        }

        Ok(inventory)
    }
}

impl PromotionFixture {
    /// Map a configuration tag onto its promotion variant.
    pub fn to_promotion(&self) -> Promotion {
        match *self {
            PromotionFixture::GetOneFree { frequency } => Promotion::GetOneFree { frequency },
            PromotionFixture::Package { size, percent } => Promotion::Package { size, percent },
            PromotionFixture::Threshold { threshold, percent } => {
                Promotion::Threshold { threshold, percent }
            }
        }
    }
}

/// Resolve an ISO currency code to its currency.
fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "USD" => Ok(iso::USD),
        "GBP" => Ok(iso::GBP),
        "EUR" => Ok(iso::EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_owned())),
    }
}

/// Parse a decimal amount string such as `"2.79"`.
fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_owned()))
}
