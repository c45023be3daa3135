//! Promotions
//!
//! A promotion is a per-product discount policy applied automatically to a
//! cart line based on the quantity purchased. Each variant maps one-to-one
//! onto a registration configuration tag; an absent configuration is
//! [`Promotion::None`].

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{self, PricingError},
    utils::ordinalize,
};

/// Errors raised by promotion configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// A get-one-free frequency below two would make every item free.
    #[error("get-one-free frequency must be at least 2, got {0}")]
    FrequencyTooLow(u32),

    /// A package must contain at least one item.
    #[error("package size must be at least 1, got {0}")]
    EmptyPackage(u32),

    /// Discount percentages are whole numbers between 0 and 100.
    #[error("discount percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(u32),
}

/// A per-line-item discount policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// No discount.
    None,

    /// Every `frequency`-th unit is free.
    GetOneFree {
        /// How many units must be bought for one of them to be free.
        frequency: u32,
    },

    /// A percentage off every whole package of `size` units.
    Package {
        /// Number of units that make up one discounted package.
        size: u32,

        /// Whole percentage taken off each packaged unit.
        percent: u32,
    },

    /// A percentage off every unit past a quantity threshold.
    Threshold {
        /// Number of units paid at full price.
        threshold: u32,

        /// Whole percentage taken off each unit above the threshold.
        percent: u32,
    },
}

impl Promotion {
    /// Check the configuration invariants of this promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`PromotionError`] if the frequency, package size or percent
    /// is out of range.
    pub fn validate(&self) -> Result<(), PromotionError> {
        match *self {
            Promotion::None => Ok(()),
            Promotion::GetOneFree { frequency } => {
                if frequency < 2 {
                    Err(PromotionError::FrequencyTooLow(frequency))
                } else {
                    Ok(())
                }
            }
            Promotion::Package { size, percent } => {
                if size < 1 {
                    Err(PromotionError::EmptyPackage(size))
                } else {
                    check_percent(percent)
                }
            }
            Promotion::Threshold { percent, .. } => check_percent(percent),
        }
    }

    /// Calculate the discount for a line of `count` units at `unit_price`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount cannot be represented in
    /// minor units.
    pub fn calculate_discount(
        &self,
        count: u32,
        unit_price: &Money<'static, Currency>,
    ) -> Result<Money<'static, Currency>, PricingError> {
        match *self {
            Promotion::None => Ok(pricing::zero(unit_price.currency())),
            Promotion::GetOneFree { frequency } => {
                // Registration rejects a zero frequency; a hand-built
                // promotion falls back to no free units.
                let free = count.checked_div(frequency).unwrap_or(0);

                pricing::scale(unit_price, free)
            }
            Promotion::Package { size, percent } => {
                let Some(remainder) = count.checked_rem(size) else {
                    return Ok(pricing::zero(unit_price.currency()));
                };

                // Only whole packages qualify.
                let packaged = count - remainder;

                pricing::percent_of(&pricing::scale(unit_price, packaged)?, percent)
            }
            Promotion::Threshold { threshold, percent } => {
                if count > threshold {
                    pricing::percent_of(&pricing::scale(unit_price, count - threshold)?, percent)
                } else {
                    Ok(pricing::zero(unit_price.currency()))
                }
            }
        }
    }

    /// Human-readable description, as printed on the invoice.
    ///
    /// [`Promotion::None`] describes itself as the empty string.
    pub fn describe(&self) -> String {
        match *self {
            Promotion::None => String::new(),
            Promotion::GetOneFree { frequency } => {
                format!("buy {}, get 1 free", frequency.saturating_sub(1))
            }
            Promotion::Package { size, percent } => {
                format!("get {percent}% off for every {size}")
            }
            Promotion::Threshold { threshold, percent } => {
                format!("{percent}% off of every after the {}", ordinalize(threshold))
            }
        }
    }

    /// Whether this promotion discounts anything at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Promotion::None)
    }
}

fn check_percent(percent: u32) -> Result<(), PromotionError> {
    if percent > 100 {
        Err(PromotionError::PercentOutOfRange(percent))
    } else {
        Ok(())
    }
}
