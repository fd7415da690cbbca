//! Integration test for the storefront cart flow.
//!
//! Walks the cart through the add → adjust → checkout lifecycle using the
//! jewellery fixture set and checks the cart invariants after every
//! mutation: product ids stay unique, quantities stay positive, and the
//! derived totals always agree with the item sequence.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use vitrine::prelude::*;
use vitrine::fixtures::Fixture;

fn assert_invariants(cart: &Cart<'_>) -> TestResult {
    let mut seen: Vec<&str> = Vec::new();
    let mut expected_units = 0_u64;
    let mut expected_minor = 0_i64;

    for item in cart.iter() {
        assert!(
            !seen.contains(&item.product().as_str()),
            "duplicate product id in cart"
        );

        seen.push(item.product().as_str());

        expected_units += u64::from(item.quantity().get());
        expected_minor +=
            item.unit_price().to_minor_units() * i64::from(item.quantity().get());
    }

    assert_eq!(cart.total_items(), expected_units);
    assert_eq!(cart.subtotal()?.to_minor_units(), expected_minor);

    Ok(())
}

#[test]
fn merge_semantics_keep_one_entry_per_product() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let ring = fixture.product("solitaire-ring")?;

    let mut cart = Cart::new(fixture.currency()?);

    cart.add(ring.to_line_item(NonZeroU32::MIN))?;
    cart.add(ring.to_line_item(NonZeroU32::new(2).ok_or("nonzero")?))?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.subtotal()?, Money::from_minor(435_000, USD));

    assert_invariants(&cart)?;

    Ok(())
}

#[test]
fn full_cart_lifecycle_preserves_invariants() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let mut cart = fixture.cart(Some(4))?;

    assert_invariants(&cart)?;

    // Merge another unit of an existing product.
    let band = fixture.product("eternity-band")?;
    cart.add(band.to_line_item(NonZeroU32::MIN))?;
    assert_invariants(&cart)?;

    // Strict set.
    cart.set_quantity(&ProductId::from("pearl-studs"), NonZeroU32::new(3).ok_or("nonzero")?)?;
    assert_invariants(&cart)?;

    // Policy update: zero removes.
    cart.update_quantity(&ProductId::from("gold-bangle"), 0);
    assert!(cart.get(&ProductId::from("gold-bangle")).is_none());
    assert_invariants(&cart)?;

    // Idempotent removal of something already gone.
    assert!(cart.remove(&ProductId::from("gold-bangle")).is_none());
    assert_invariants(&cart)?;

    // Checkout payload carries ids and quantities in cart order.
    let draft = OrderDraft::from_cart(&cart)?;

    assert_eq!(
        draft.lines,
        vec![
            OrderLine {
                product_id: ProductId::from("solitaire-ring"),
                quantity: 1,
            },
            OrderLine {
                product_id: ProductId::from("eternity-band"),
                quantity: 2,
            },
            OrderLine {
                product_id: ProductId::from("pearl-studs"),
                quantity: 3,
            },
        ]
    );

    // Clearing after checkout leaves an empty cart with zero totals.
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.subtotal()?.to_minor_units(), 0);
    assert_eq!(OrderDraft::from_cart(&cart), Err(CheckoutError::EmptyCart));

    Ok(())
}

#[test]
fn negative_style_update_also_removes() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let mut cart = fixture.cart(Some(2))?;

    // The policy operation only accepts unsigned input; zero is the
    // canonical "remove" signal for both 0 and would-be negatives.
    cart.update_quantity(&ProductId::from("solitaire-ring"), 0);

    assert!(cart.get(&ProductId::from("solitaire-ring")).is_none());
    assert_eq!(cart.len(), 1);

    Ok(())
}

#[test]
fn summary_renders_fixture_cart() -> TestResult {
    let fixture = Fixture::from_set("jewellery")?;
    let cart = fixture.cart(Some(3))?;

    let mut out = Vec::new();
    write_summary(&mut out, &cart)?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Solitaire Diamond Ring"));
    assert!(output.contains("Eternity Band"));
    assert!(output.contains("Pearl Stud Earrings"));
    assert!(output.contains("Subtotal:"));

    Ok(())
}
