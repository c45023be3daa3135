//! Till
//!
//! Till is a small point-of-sale pricing and invoicing engine written in Rust.

pub mod cart;
pub mod coupons;
pub mod fixtures;
pub mod inventory;
pub mod invoice;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod utils;
