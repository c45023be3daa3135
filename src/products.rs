//! Products

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{self, PricingError},
    promotions::{Promotion, PromotionError},
};

/// Longest accepted product name.
pub const MAX_NAME_LENGTH: usize = 40;

/// Errors raised when a product registration is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// The name is longer than [`MAX_NAME_LENGTH`] characters.
    #[error("product name {name:?} is longer than {MAX_NAME_LENGTH} characters")]
    NameTooLong {
        /// The rejected name.
        name: String,
    },

    /// The unit price must lie within 0.01..=999.99.
    #[error("product price {price} is outside the 0.01..=999.99 range")]
    PriceOutOfRange {
        /// The rejected price.
        price: Decimal,
    },

    /// A product with the same name is already registered.
    #[error("a product named {name:?} is already registered")]
    AlreadyRegistered {
        /// The duplicated name.
        name: String,
    },

    /// The attached promotion configuration is invalid.
    #[error(transparent)]
    Promotion(#[from] PromotionError),

    /// The price could not be represented in minor units.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A catalog entry: name, unit price and the promotion attached at
/// registration. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Money<'static, Currency>,
    promotion: Promotion,
}

impl Product {
    /// Build a validated product.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the name is too long, the price is
    /// outside 0.01..=999.99 or the promotion configuration is invalid.
    pub fn new(
        name: &str,
        price: Decimal,
        promotion: Promotion,
        currency: &'static Currency,
    ) -> Result<Self, ProductError> {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductError::NameTooLong {
                name: name.to_owned(),
            });
        }

        if price < Decimal::new(1, 2) || price > Decimal::new(99_999, 2) {
            return Err(ProductError::PriceOutOfRange { price });
        }

        promotion.validate()?;

        Ok(Product {
            name: name.to_owned(),
            price: Money::from_minor(pricing::to_minor(&price)?, currency),
            promotion,
        })
    }

    /// Product name, unique within an inventory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// The promotion attached at registration.
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_keeps_name_price_and_promotion() -> TestResult {
        let product = Product::new(
            "Green Tea",
            Decimal::new(279, 2),
            Promotion::GetOneFree { frequency: 2 },
            iso::USD,
        )?;

        assert_eq!(product.name(), "Green Tea");
        assert_eq!(product.price(), &Money::from_minor(279, iso::USD));
        assert_eq!(product.promotion(), &Promotion::GetOneFree { frequency: 2 });

        Ok(())
    }

    #[test]
    fn new_rejects_a_name_longer_than_forty_characters() {
        let name = "x".repeat(41);
        let result = Product::new(&name, Decimal::new(100, 2), Promotion::None, iso::USD);

        assert!(matches!(result, Err(ProductError::NameTooLong { .. })));
    }

    #[test]
    fn new_accepts_a_name_of_exactly_forty_characters() -> TestResult {
        let name = "x".repeat(40);
        let product = Product::new(&name, Decimal::new(100, 2), Promotion::None, iso::USD)?;

        assert_eq!(product.name(), name);

        Ok(())
    }

    #[test]
    fn new_rejects_prices_outside_the_allowed_range() {
        let too_low = Product::new("Freebie", Decimal::ZERO, Promotion::None, iso::USD);
        let too_high = Product::new(
            "Luxury",
            Decimal::new(100_000, 2),
            Promotion::None,
            iso::USD,
        );

        assert_eq!(
            too_low,
            Err(ProductError::PriceOutOfRange {
                price: Decimal::ZERO
            })
        );
        assert_eq!(
            too_high,
            Err(ProductError::PriceOutOfRange {
                price: Decimal::new(100_000, 2)
            })
        );
    }

    #[test]
    fn new_accepts_boundary_prices() -> TestResult {
        let cheapest = Product::new("Penny", Decimal::new(1, 2), Promotion::None, iso::USD)?;
        let dearest = Product::new("Dear", Decimal::new(99_999, 2), Promotion::None, iso::USD)?;

        assert_eq!(cheapest.price(), &Money::from_minor(1, iso::USD));
        assert_eq!(dearest.price(), &Money::from_minor(99_999, iso::USD));

        Ok(())
    }

    #[test]
    fn new_rejects_an_invalid_promotion_configuration() {
        let result = Product::new(
            "Tea",
            Decimal::new(100, 2),
            Promotion::GetOneFree { frequency: 1 },
            iso::USD,
        );

        assert_eq!(
            result,
            Err(ProductError::Promotion(PromotionError::FrequencyTooLow(1)))
        );
    }
}
