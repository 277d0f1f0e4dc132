//! Integration tests for the cart ledger.
//!
//! These exercise the ledger through the public API only, with hand-built
//! products so prices are easy to follow.

use rust_decimal::Decimal;
use shophub_core::{CartLedger, Price, ProductId, Quantity, ShippingPolicy};
use shophub_integration_tests::product;

fn qty(n: u32) -> Quantity {
    Quantity::new(n).expect("quantity should be positive")
}

// =============================================================================
// Add / Merge Tests
// =============================================================================

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let mug = product(1, "Mug", 1200);
    let mut cart = CartLedger::new();

    let adds = [1, 3, 2, 5];
    for n in adds {
        cart.add_or_increment(&mug, qty(n));
    }

    assert_eq!(cart.len(), 1, "Same product should never get a second row");
    let line = cart.get(mug.id).expect("line should exist");
    assert_eq!(line.quantity.get(), adds.iter().sum::<u32>());
}

#[test]
fn test_add_returns_resulting_quantity() {
    let mug = product(1, "Mug", 1200);
    let mut cart = CartLedger::new();

    assert_eq!(cart.add_or_increment(&mug, Quantity::ONE), Quantity::ONE);
    assert_eq!(cart.add_or_increment(&mug, qty(4)), qty(5));
}

#[test]
fn test_lines_keep_insertion_order() {
    let mut cart = CartLedger::new();
    for (id, name) in [(3, "Lamp"), (1, "Mug"), (2, "Rug")] {
        cart.add_or_increment(&product(id, name, 500), Quantity::ONE);
    }
    cart.add_or_increment(&product(1, "Mug", 500), Quantity::ONE);

    let order: Vec<i32> = cart.items().iter().map(|l| l.product_id.as_i32()).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_line_snapshots_product_details() {
    let mut mug = product(1, "Mug", 1200);
    let mut cart = CartLedger::new();
    cart.add_or_increment(&mug, Quantity::ONE);

    mug.price = Price::from_cents(9900);
    cart.add_or_increment(&mug, Quantity::ONE);

    let line = cart.get(mug.id).expect("line should exist");
    assert_eq!(line.unit_price, Price::from_cents(1200));
    assert_eq!(line.image, "mug.jpg");
}

// =============================================================================
// Quantity Tests
// =============================================================================

#[test]
fn test_set_quantity_clamps_to_one() {
    let mug = product(1, "Mug", 1200);
    let mut cart = CartLedger::new();
    cart.add_or_increment(&mug, qty(4));

    for requested in [0, -1, -250, i64::MIN] {
        assert_eq!(cart.set_quantity(mug.id, requested), Some(Quantity::ONE));
        assert_eq!(cart.get(mug.id).map(|l| l.quantity), Some(Quantity::ONE));
    }
    assert_eq!(cart.len(), 1, "Clamping must not remove the line");
}

#[test]
fn test_set_quantity_on_missing_product_is_noop() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Mug", 1200), qty(2));
    let before = cart.clone();

    assert_eq!(cart.set_quantity(ProductId::new(99), 7), None);
    assert_eq!(cart, before);
}

#[test]
fn test_decrement_stops_at_one() {
    let mug = product(1, "Mug", 1200);
    let mut cart = CartLedger::new();
    cart.add_or_increment(&mug, qty(2));

    assert_eq!(cart.adjust_quantity(mug.id, -1), Some(Quantity::ONE));
    assert_eq!(cart.adjust_quantity(mug.id, -1), Some(Quantity::ONE));
    assert_eq!(cart.adjust_quantity(mug.id, 1), Some(qty(2)));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_is_idempotent() {
    let mut once = CartLedger::new();
    let mut twice = CartLedger::new();
    for cart in [&mut once, &mut twice] {
        cart.add_or_increment(&product(1, "Mug", 1200), qty(3));
        cart.add_or_increment(&product(2, "Rug", 4500), Quantity::ONE);
    }

    assert!(once.remove(ProductId::new(1)).is_some());
    assert!(twice.remove(ProductId::new(1)).is_some());
    assert!(twice.remove(ProductId::new(1)).is_none());

    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[test]
fn test_remove_ignores_quantity() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Mug", 1200), qty(40));

    let removed = cart.remove(ProductId::new(1)).expect("line should be removed");
    assert_eq!(removed.quantity, qty(40));
    assert!(cart.is_empty());
}

// =============================================================================
// Totals Tests
// =============================================================================

#[test]
fn test_empty_cart_totals_are_zero() {
    let totals = CartLedger::new().compute_totals();
    assert_eq!(totals.subtotal, Price::ZERO);
    assert_eq!(totals.shipping_fee, Price::ZERO);
    assert_eq!(totals.total, Price::ZERO);
}

#[test]
fn test_single_item_below_threshold_pays_shipping() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Mug", 3000), Quantity::ONE);

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal.amount(), Decimal::new(3000, 2));
    assert_eq!(totals.shipping_fee.amount(), Decimal::new(999, 2));
    assert_eq!(totals.total.amount(), Decimal::new(3999, 2));
}

#[test]
fn test_single_item_above_threshold_ships_free() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Lamp", 6000), Quantity::ONE);

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, Price::from_dollars(60));
    assert_eq!(totals.shipping_fee, Price::ZERO);
    assert_eq!(totals.total, Price::from_dollars(60));
}

#[test]
fn test_mixed_lines_total() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Mug", 1000), qty(2));
    cart.add_or_increment(&product(2, "Coaster", 500), qty(3));

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, Price::from_dollars(35));
    assert_eq!(totals.shipping_fee, Price::from_cents(999));
    assert_eq!(totals.total, Price::from_cents(4499));
}

#[test]
fn test_subtotal_of_exactly_fifty_still_pays_shipping() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Mug", 2500), qty(2));

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, Price::from_dollars(50));
    assert_eq!(totals.shipping_fee, Price::from_cents(999));
    assert_eq!(totals.amount_until_free_shipping(), None);
}

#[test]
fn test_totals_follow_every_mutation() {
    let mug = product(1, "Mug", 3000);
    let mut cart = CartLedger::new();
    cart.add_or_increment(&mug, Quantity::ONE);
    assert_eq!(cart.compute_totals().total, Price::from_cents(3999));

    cart.set_quantity(mug.id, 2);
    assert_eq!(cart.compute_totals().total, Price::from_dollars(60));

    cart.remove(mug.id);
    assert_eq!(cart.compute_totals().total, Price::ZERO);
}

#[test]
fn test_custom_policy() {
    let policy = ShippingPolicy::new(Price::from_dollars(100), Price::from_cents(450));
    let mut cart = CartLedger::with_policy(policy);
    cart.add_or_increment(&product(1, "Lamp", 6000), Quantity::ONE);

    let totals = cart.compute_totals();
    assert_eq!(totals.shipping_fee, Price::from_cents(450));
    assert_eq!(totals.amount_until_free_shipping(), Some(Price::from_dollars(40)));
}

#[test]
fn test_extreme_line_totals_saturate() {
    let mut yacht = product(1, "Yacht", 100);
    yacht.price = "100000000000000000000".parse().expect("valid price");
    let mut cart = CartLedger::new();
    cart.add_or_increment(&yacht, qty(u32::MAX));
    cart.add_or_increment(&product(2, "Mug", 1200), Quantity::ONE);

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, Price::MAX);
    assert_eq!(totals.shipping_fee, Price::ZERO);
    assert_eq!(totals.total, Price::MAX);
}

#[test]
fn test_free_item_cart_pays_shipping() {
    let mut cart = CartLedger::new();
    cart.add_or_increment(&product(1, "Sticker", 0), qty(3));

    let totals = cart.compute_totals();
    assert_eq!(totals.subtotal, Price::ZERO);
    assert_eq!(totals.shipping_fee, Price::from_cents(999));
    assert_eq!(totals.total, Price::from_cents(999));
}
