//! Line items

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{self, PricingError},
    products::Product,
};

/// Largest quantity a single cart line may hold.
pub const MAX_QUANTITY: u32 = 99;

/// A line item quantity left the 0..=[`MAX_QUANTITY`] range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line item quantity must stay within 0..={MAX_QUANTITY}, got {count}")]
pub struct InvalidQuantity {
    /// The quantity the line would have reached.
    pub count: u64,
}

/// One cart row: a registered product and the quantity purchased.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: &'a Product,
    count: u32,
}

impl<'a> LineItem<'a> {
    /// Create a line for `count` units of a product.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] if `count` exceeds [`MAX_QUANTITY`].
    pub fn new(product: &'a Product, count: u32) -> Result<Self, InvalidQuantity> {
        if count > MAX_QUANTITY {
            return Err(InvalidQuantity {
                count: u64::from(count),
            });
        }

        Ok(LineItem { product, count })
    }

    /// Add `amount` units to this line.
    ///
    /// The count is left untouched when the increase is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidQuantity`] if the resulting count would exceed
    /// [`MAX_QUANTITY`].
    pub fn increase(&mut self, amount: u32) -> Result<(), InvalidQuantity> {
        let next = u64::from(self.count) + u64::from(amount);

        if next > u64::from(MAX_QUANTITY) {
            return Err(InvalidQuantity { count: next });
        }

        self.count += amount;

        Ok(())
    }

    /// Name of the product on this line.
    pub fn name(&self) -> &str {
        self.product.name()
    }

    /// Number of units on this line.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The product this line refers to.
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Price before the product's promotion is applied.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amount cannot be represented in
    /// minor units.
    pub fn gross_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        pricing::scale(self.product.price(), self.count)
    }

    /// Discount granted by the product's promotion for this quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amount cannot be represented in
    /// minor units.
    pub fn discount(&self) -> Result<Money<'static, Currency>, PricingError> {
        self.product
            .promotion()
            .calculate_discount(self.count, self.product.price())
    }

    /// Price after the product's promotion is applied.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amount cannot be represented in
    /// minor units or the subtraction fails.
    pub fn net_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        Ok(self.gross_price()?.sub(self.discount()?)?)
    }

    /// Whether the product carries an active promotion.
    pub fn discounted(&self) -> bool {
        self.product.promotion().is_active()
    }
}
