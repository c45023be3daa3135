//! Inventory
//!
//! The catalog of registered products and coupons, and the factory for
//! carts. Registration is append-only; products and coupons are immutable
//! once registered and may be read from any number of carts. Registration
//! itself is not synchronized and must happen before carts are shared
//! across threads.

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::Cart,
    coupons::{Coupon, CouponError, CouponOffer},
    products::{Product, ProductError},
    promotions::Promotion,
};

/// Errors raised by catalog registration and lookup.
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    /// Product registration was rejected.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    /// Coupon registration was rejected.
    #[error("invalid coupon: {0}")]
    InvalidCoupon(#[from] CouponError),

    /// A coupon with the same name is already registered.
    #[error("a coupon named {0:?} is already registered")]
    DuplicateCoupon(String),

    /// No product or coupon with the requested name is registered.
    #[error("nothing named {0:?} is registered")]
    NotFound(String),
}

/// The product and coupon catalog. All prices share one currency.
#[derive(Debug)]
pub struct Inventory {
    currency: &'static Currency,
    products: Vec<Product>,
    coupons: Vec<Coupon>,
}

impl Inventory {
    /// Create an empty inventory priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Inventory {
            currency,
            products: Vec::new(),
            coupons: Vec::new(),
        }
    }

    /// The currency all registered prices share.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Register a product. Nothing is recorded when registration fails.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidProduct`] if the name is longer than
    /// 40 characters or already registered, the price lies outside
    /// 0.01..=999.99, or the promotion configuration is invalid.
    pub fn register(
        &mut self,
        name: &str,
        price: Decimal,
        promotion: Promotion,
    ) -> Result<(), InventoryError> {
        if self.products.iter().any(|product| product.name() == name) {
            return Err(ProductError::AlreadyRegistered {
                name: name.to_owned(),
            }
            .into());
        }

        let product = Product::new(name, price, promotion, self.currency)?;
        self.products.push(product);

        Ok(())
    }

    /// Register a coupon. Nothing is recorded when registration fails.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateCoupon`] if a coupon with the same
    /// name exists, or [`InventoryError::InvalidCoupon`] if the offer is out
    /// of range.
    pub fn register_coupon(&mut self, name: &str, offer: CouponOffer) -> Result<(), InventoryError> {
        if self.coupons.iter().any(|coupon| coupon.name() == name) {
            return Err(InventoryError::DuplicateCoupon(name.to_owned()));
        }

        let coupon = Coupon::new(name, offer, self.currency)?;
        self.coupons.push(coupon);

        Ok(())
    }

    /// Look up a registered product by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no product has that name.
    pub fn get_item(&self, name: &str) -> Result<&Product, InventoryError> {
        self.products
            .iter()
            .find(|product| product.name() == name)
            .ok_or_else(|| InventoryError::NotFound(name.to_owned()))
    }

    /// Look up a registered coupon by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] if no coupon has that name.
    pub fn get_coupon(&self, name: &str) -> Result<&Coupon, InventoryError> {
        self.coupons
            .iter()
            .find(|coupon| coupon.name() == name)
            .ok_or_else(|| InventoryError::NotFound(name.to_owned()))
    }

    /// Create an empty cart bound to this inventory.
    pub fn new_cart(&self) -> Cart<'_> {
        Cart::new(self)
    }
}
