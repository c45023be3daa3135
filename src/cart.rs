//! Carts
//!
//! A cart accumulates line items against one inventory and holds at most
//! one coupon. Line items keep their insertion order, which is also the
//! order they are printed on the invoice.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    coupons::Coupon,
    inventory::{Inventory, InventoryError},
    invoice,
    items::{InvalidQuantity, LineItem},
    pricing::{self, PricingError},
};

/// Errors raised while mutating or totalling a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A product or coupon lookup failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// A line item quantity left its allowed range.
    #[error(transparent)]
    Quantity(#[from] InvalidQuantity),

    /// Money arithmetic failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A customer's cart, bound to the inventory it was created from.
#[derive(Debug)]
pub struct Cart<'a> {
    inventory: &'a Inventory,
    items: SmallVec<[LineItem<'a>; 8]>,
    coupon: Coupon,
}

impl<'a> Cart<'a> {
    /// Create an empty cart. Usually reached via [`Inventory::new_cart`].
    pub fn new(inventory: &'a Inventory) -> Self {
        Cart {
            inventory,
            items: SmallVec::new(),
            coupon: Coupon::None,
        }
    }

    /// Add `amount` units of a registered product.
    ///
    /// A repeated add for the same product increases the existing line
    /// instead of appending a new one. A rejected add leaves the cart
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] for an unknown product name, or
    /// [`InvalidQuantity`] if the resulting line count would leave 0..=99.
    pub fn add(&mut self, name: &str, amount: u32) -> Result<(), CartError> {
        if let Some(item) = self.items.iter_mut().find(|item| item.name() == name) {
            item.increase(amount)?;
        } else {
            let product = self.inventory.get_item(name)?;
            self.items.push(LineItem::new(product, amount)?);
        }

        Ok(())
    }

    /// Add a single unit of a registered product.
    ///
    /// # Errors
    ///
    /// Same as [`Cart::add`].
    pub fn add_one(&mut self, name: &str) -> Result<(), CartError> {
        self.add(name, 1)
    }

    /// Apply a registered coupon, replacing any previously applied one.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] for an unknown coupon name.
    pub fn use_coupon(&mut self, name: &str) -> Result<(), CartError> {
        self.coupon = self.inventory.get_coupon(name)?.clone();

        Ok(())
    }

    /// Sum of all line items' net prices, before the coupon.
    ///
    /// An empty cart subtotals to zero in the inventory currency.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if money arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, CartError> {
        let mut subtotal = pricing::zero(self.inventory.currency());

        for item in &self.items {
            subtotal = subtotal
                .add(item.net_price()?)
                .map_err(PricingError::from)?;
        }

        Ok(subtotal)
    }

    /// The discount the applied coupon takes off the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if money arithmetic fails.
    pub fn coupon_discount(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(self.coupon.calculate_discount(&self.subtotal()?)?)
    }

    /// Subtotal minus the coupon discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if money arithmetic fails.
    pub fn total(&self) -> Result<Money<'static, Currency>, CartError> {
        let subtotal = self.subtotal()?;
        let discount = self.coupon.calculate_discount(&subtotal)?;

        Ok(subtotal.sub(discount).map_err(PricingError::from)?)
    }

    /// Render this cart as a fixed-width invoice.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if money arithmetic fails.
    pub fn invoice(&self) -> Result<String, CartError> {
        invoice::render(self)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// The applied coupon; [`Coupon::None`] until [`Cart::use_coupon`].
    pub fn coupon(&self) -> &Coupon {
        &self.coupon
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
