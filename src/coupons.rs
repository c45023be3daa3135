//! Coupons
//!
//! A coupon is a named, cart-level discount applied once to the subtotal,
//! selected explicitly by the customer. A cart without a coupon carries
//! [`Coupon::None`].

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::pricing::{self, PricingError};

/// Errors raised by coupon configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum CouponError {
    /// Coupon percentages are whole numbers between 0 and 100.
    #[error("coupon percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(u32),

    /// Flat coupon amounts cannot be negative.
    #[error("coupon amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// Flat coupon amounts must be representable in minor units.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Registration configuration for a coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponOffer {
    /// A whole percentage off the cart subtotal.
    Percent(u32),

    /// A flat amount off the cart subtotal.
    Amount(Decimal),
}

/// A cart-level discount policy, identified by name within an inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum Coupon {
    /// No coupon; discounts nothing and has an empty name.
    None,

    /// A whole percentage off the subtotal.
    Percent {
        /// Unique coupon name.
        name: String,

        /// Whole percentage taken off the subtotal.
        percent: u32,
    },

    /// A flat amount off the subtotal, clamped to what is owed.
    FlatAmount {
        /// Unique coupon name.
        name: String,

        /// Amount taken off the subtotal.
        amount: Money<'static, Currency>,
    },
}

impl Coupon {
    /// Build a coupon from its registration configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`CouponError`] if the percent is above 100 or the flat
    /// amount is negative.
    pub fn new(
        name: &str,
        offer: CouponOffer,
        currency: &'static Currency,
    ) -> Result<Self, CouponError> {
        match offer {
            CouponOffer::Percent(percent) => {
                if percent > 100 {
                    return Err(CouponError::PercentOutOfRange(percent));
                }

                Ok(Coupon::Percent {
                    name: name.to_owned(),
                    percent,
                })
            }
            CouponOffer::Amount(amount) => {
                if amount.is_sign_negative() && !amount.is_zero() {
                    return Err(CouponError::NegativeAmount(amount));
                }

                Ok(Coupon::FlatAmount {
                    name: name.to_owned(),
                    amount: Money::from_minor(pricing::to_minor(&amount)?, currency),
                })
            }
        }
    }

    /// The coupon's registered name; empty for [`Coupon::None`].
    pub fn name(&self) -> &str {
        match self {
            Coupon::None => "",
            Coupon::Percent { name, .. } | Coupon::FlatAmount { name, .. } => name,
        }
    }

    /// Calculate the discount this coupon takes off a subtotal.
    ///
    /// A flat coupon never discounts more than the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount cannot be represented in
    /// minor units.
    pub fn calculate_discount(
        &self,
        subtotal: &Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, PricingError> {
        match self {
            Coupon::None => Ok(pricing::zero(subtotal.currency())),
            Coupon::Percent { percent, .. } => pricing::percent_of(subtotal, *percent),
            Coupon::FlatAmount { amount, .. } => {
                if amount.to_minor_units() > subtotal.to_minor_units() {
                    Ok(*subtotal)
                } else {
                    Ok(*amount)
                }
            }
        }
    }

    /// Human-readable description, as printed on the invoice.
    ///
    /// [`Coupon::None`] describes itself as the empty string.
    pub fn describe(&self) -> String {
        match self {
            Coupon::None => String::new(),
            Coupon::Percent { name, percent } => {
                format!("Coupon {name} - {percent}% off")
            }
            Coupon::FlatAmount { name, amount } => {
                format!("Coupon {name} - {} off", pricing::format_amount(amount))
            }
        }
    }

    /// Whether this coupon discounts anything at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Coupon::None)
    }
}
