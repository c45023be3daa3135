//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    coupons::{Coupon, CouponError, CouponOffer},
    fixtures::{CatalogFixture, FixtureError},
    inventory::{Inventory, InventoryError},
    invoice,
    items::{InvalidQuantity, LineItem, MAX_QUANTITY},
    pricing::PricingError,
    products::{MAX_NAME_LENGTH, Product, ProductError},
    promotions::{Promotion, PromotionError},
    utils::ordinalize,
};
