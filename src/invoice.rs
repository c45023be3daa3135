//! Invoice rendering
//!
//! Turns a cart into a fixed-width tabular text report. The layout is a
//! compatibility contract: 61-character rows, a `+`/`-` delimiter line, a
//! 42-column name field, a 3-column quantity and an 8-column price field,
//! with every amount printed to exactly two decimals. Discounts appear as
//! negative amounts on their own rows.

use crate::{
    cart::{Cart, CartError},
    items::LineItem,
    pricing::{format_amount, negate},
};

/// Row delimiter: 48 dashes for the name/qty column, 10 for the price.
const DELIMITER: &str =
    "+------------------------------------------------+----------+\n";

/// Render a cart as invoice text.
///
/// Deterministic and side-effect-free for a given cart state.
///
/// # Errors
///
/// Returns a [`CartError`] if a price or total cannot be computed.
pub fn render(cart: &Cart<'_>) -> Result<String, CartError> {
    let mut out = String::new();

    out.push_str(DELIMITER);
    push_row(&mut out, &format!("{:<42} qty", "Name"), "price");
    out.push_str(DELIMITER);

    for item in cart.items() {
        push_product_entry(&mut out, item)?;
    }

    if cart.coupon().is_active() {
        push_row(
            &mut out,
            &cart.coupon().describe(),
            &format_amount(&negate(&cart.coupon_discount()?)),
        );
    }

    out.push_str(DELIMITER);
    push_row(&mut out, "TOTAL", &format_amount(&cart.total()?));
    out.push_str(DELIMITER);

    Ok(out)
}

/// One product line, plus its promotion line when one is active.
fn push_product_entry(out: &mut String, item: &LineItem<'_>) -> Result<(), CartError> {
    push_row(
        out,
        &format!("{:<42} {:>3}", item.name(), item.count()),
        &format_amount(&item.gross_price()?),
    );

    if item.discounted() {
        let label = format!("({})", item.product().promotion().describe());

        push_row(
            out,
            &format!("  {label:<44}"),
            &format_amount(&negate(&item.discount()?)),
        );
    }

    Ok(())
}

/// `| left (ljust 46) | amount (rjust 8) |`
fn push_row(out: &mut String, left: &str, amount: &str) {
    out.push_str(&format!("| {left:<46} | {amount:>8} |\n"));
}
