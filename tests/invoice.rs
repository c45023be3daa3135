//! End-to-end scenarios: catalog registration, cart pricing and the exact
//! invoice layout.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use testresult::TestResult;

use till::{
    cart::CartError,
    coupons::CouponOffer,
    fixtures::CatalogFixture,
    inventory::{Inventory, InventoryError},
    items::InvalidQuantity,
    products::ProductError,
    promotions::Promotion,
};

const CATALOG: &str = r#"
currency: USD
products:
  - name: Green Tea
    price: "2.50"
  - name: Black Coffee
    price: "3.00"
    promotion:
      type: get_one_free
      frequency: 3
  - name: Milk
    price: "1.20"
    promotion:
      type: package
      size: 4
      percent: 25
  - name: Cereal
    price: "4.00"
    promotion:
      type: threshold
      threshold: 5
      percent: 25
coupons:
  - type: percent
    name: TEATIME
    percent: 10
  - type: amount
    name: FIVER
    amount: "5.00"
"#;

#[test]
fn a_full_cart_renders_the_exact_invoice_layout() -> TestResult {
    let inventory = CatalogFixture::from_yaml(CATALOG)?.build()?;
    let mut cart = inventory.new_cart();

    cart.add("Green Tea", 2)?;
    cart.add("Black Coffee", 6)?;
    cart.add("Milk", 5)?;
    cart.add("Cereal", 8)?;
    cart.use_coupon("TEATIME")?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Green Tea                                    2 |     5.00 |
| Black Coffee                                 6 |    18.00 |
|   (buy 2, get 1 free)                          |    -6.00 |
| Milk                                         5 |     6.00 |
|   (get 25% off for every 4)                    |    -1.20 |
| Cereal                                       8 |    32.00 |
|   (25% off of every after the 5th)             |    -3.00 |
| Coupon TEATIME - 10% off                       |    -5.08 |
+------------------------------------------------+----------+
| TOTAL                                          |    45.72 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice()?, expected);
    assert_eq!(cart.total()?, Money::from_minor(4572, iso::USD));

    Ok(())
}

#[test]
fn a_flat_coupon_renders_its_amount_and_never_exceeds_the_subtotal() -> TestResult {
    let inventory = CatalogFixture::from_yaml(CATALOG)?.build()?;
    let mut cart = inventory.new_cart();

    cart.add("Green Tea", 1)?;
    cart.use_coupon("FIVER")?;

    let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Green Tea                                    1 |     2.50 |
| Coupon FIVER - 5.00 off                        |    -2.50 |
+------------------------------------------------+----------+
| TOTAL                                          |     0.00 |
+------------------------------------------------+----------+
";

    assert_eq!(cart.invoice()?, expected);

    Ok(())
}

#[test]
fn plain_widget_cart_totals_its_gross_price() -> TestResult {
    let mut inventory = Inventory::new(iso::USD);
    inventory.register("Widget", Decimal::new(1000, 2), Promotion::None)?;

    let mut cart = inventory.new_cart();
    cart.add("Widget", 3)?;

    assert_eq!(cart.total()?, Money::from_minor(3000, iso::USD));

    Ok(())
}

#[test]
fn get_one_free_widget_cart_discounts_a_unit() -> TestResult {
    let mut inventory = Inventory::new(iso::USD);
    inventory.register(
        "Widget",
        Decimal::new(1000, 2),
        Promotion::GetOneFree { frequency: 3 },
    )?;

    let mut cart = inventory.new_cart();
    cart.add("Widget", 3)?;

    assert_eq!(cart.total()?, Money::from_minor(2000, iso::USD));

    Ok(())
}

#[test]
fn a_percent_coupon_discounts_a_round_subtotal() -> TestResult {
    let mut inventory = Inventory::new(iso::USD);
    inventory.register("Widget", Decimal::new(1000, 2), Promotion::None)?;
    inventory.register_coupon("SAVE10", CouponOffer::Percent(10))?;

    let mut cart = inventory.new_cart();
    cart.add("Widget", 10)?;
    cart.use_coupon("SAVE10")?;

    assert_eq!(cart.total()?, Money::from_minor(9000, iso::USD));

    Ok(())
}

#[test]
fn registration_and_cart_failures_are_typed() -> TestResult {
    let mut inventory = Inventory::new(iso::USD);

    assert!(matches!(
        inventory.register("X", Decimal::new(100_000, 2), Promotion::None),
        Err(InventoryError::InvalidProduct(
            ProductError::PriceOutOfRange { .. }
        ))
    ));

    inventory.register("Widget", Decimal::new(1000, 2), Promotion::None)?;

    let mut cart = inventory.new_cart();

    assert!(matches!(
        cart.add("Unknown", 1),
        Err(CartError::Inventory(InventoryError::NotFound(_)))
    ));
    assert!(matches!(
        cart.add("Widget", 100),
        Err(CartError::Quantity(InvalidQuantity { count: 100 }))
    ));

    Ok(())
}
