//! Invoice Demo
//!
//! Builds an inventory from a YAML catalog, fills a cart and prints the
//! invoice.
//!
//! Use `-c` to point at a catalog file
//! Use `-l NAME:QTY` (repeatable) to add cart lines
//! Use `--coupon` to apply a registered coupon

use anyhow::{Context, Result, bail};
use clap::Parser;

use till::{fixtures::CatalogFixture, utils::InvoiceDemoArgs};

/// Invoice Demo
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = InvoiceDemoArgs::parse();

    let inventory = CatalogFixture::from_path(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog))?
        .build()?;

    let mut cart = inventory.new_cart();

    for line in &args.line {
        let (name, quantity) = parse_line(line)?;
        cart.add(name, quantity)
            .with_context(|| format!("adding {line}"))?;
    }

    if let Some(coupon) = args.coupon.as_deref() {
        cart.use_coupon(coupon)
            .with_context(|| format!("applying coupon {coupon}"))?;
    }

    println!("{}", cart.invoice()?);

    Ok(())
}

/// Split a `NAME:QTY` argument into its parts.
fn parse_line(line: &str) -> Result<(&str, u32)> {
    let Some((name, quantity)) = line.rsplit_once(':') else {
        bail!("expected NAME:QTY, got {line:?}");
    };

    Ok((name, quantity.parse()?))
}
