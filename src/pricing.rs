//! Pricing
//!
//! Money helpers shared by promotions, coupons and carts. All amounts are
//! whole minor units (cents); percentage maths goes through [`Decimal`] and
//! rounds midpoint-away-from-zero back to minor units. Each percentage is
//! rounded when it is computed, so a subtotal sums already-rounded cents
//! rather than deferring one rounding to render time.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors specific to money arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// An amount could not be represented in minor units.
    #[error("amount arithmetic overflowed or was not representable")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A zero amount in the given currency.
pub fn zero(currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(0, currency)
}

/// Convert a decimal amount to minor units, rounding to the nearest cent.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the amount cannot be represented
/// in minor units.
pub fn to_minor(amount: &Decimal) -> Result<i64, PricingError> {
    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .ok_or(PricingError::Overflow)
}

/// Multiply a unit price by a quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn scale(
    price: &Money<'static, Currency>,
    count: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(count))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Take a whole percentage (0..=100) of an amount, rounded to the nearest cent.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn percent_of(
    amount: &Money<'static, Currency>,
    percent: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = percent_of_minor(percent, amount.to_minor_units())?;

    Ok(Money::from_minor(minor, amount.currency()))
}

/// Negate an amount. Used when rendering discounts on an invoice.
pub fn negate(amount: &Money<'static, Currency>) -> Money<'static, Currency> {
    Money::from_minor(-amount.to_minor_units(), amount.currency())
}

/// Render an amount with exactly two fractional digits, no grouping.
pub fn format_amount(amount: &Money<'static, Currency>) -> String {
    let minor = amount.to_minor_units();
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();

    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Calculate a whole percentage of a minor unit amount.
fn percent_of_minor(percent: u32, minor: i64) -> Result<i64, PricingError> {
    let fraction = Decimal::new(i64::from(percent), 2);

    let Some(applied) = fraction.checked_mul(Decimal::from(minor)) else {
        return Err(PricingError::Overflow);
    };

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::Overflow)
}
