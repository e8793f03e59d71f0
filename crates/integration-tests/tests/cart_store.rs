//! Integration tests for cart arithmetic.
//!
//! These drive `CartStore` the way the flow controller does and check the
//! totals a guest would see.

use qr_menu_core::{Category, Language, MenuItem, Price, Quantity};
use qr_menu_ordering::CartStore;

fn item(id: &str, cents: u32) -> MenuItem {
    MenuItem {
        id: id.into(),
        name: format!("Item {id}"),
        description: String::new(),
        price: Price::from_cents(cents),
        category: Category::Food,
        vegetarian: false,
    }
}

fn qty(n: u32) -> Quantity {
    Quantity::new(n).unwrap()
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_add_then_merge_updates_total() {
    let mut store = CartStore::new(Language::En);
    let salad = item("7", 800);

    store.add_to_cart(&salad, qty(2));
    assert_eq!(store.total(), Price::from_cents(1600));

    store.add_to_cart(&salad, qty(1));
    assert_eq!(store.line_count(), 1);
    assert_eq!(store.line(&"7".into()).unwrap().quantity, qty(3));
    assert_eq!(store.total(), Price::from_cents(2400));
}

#[test]
fn test_update_to_zero_empties_cart() {
    let mut store = CartStore::new(Language::En);
    store.add_to_cart(&item("7", 800), qty(2));

    store.update_cart_quantity(&"7".into(), 0);

    assert!(store.is_empty());
    assert_eq!(store.total(), Price::ZERO);
}

#[test]
fn test_negative_update_removes_line() {
    let mut store = CartStore::new(Language::En);
    store.add_to_cart(&item("1", 250), qty(1));
    store.add_to_cart(&item("2", 400), qty(1));

    store.update_cart_quantity(&"1".into(), -3);

    assert_eq!(store.line_count(), 1);
    assert_eq!(store.total(), Price::from_cents(400));
}

#[test]
fn test_total_is_exact_for_decimal_prices() {
    let mut store = CartStore::new(Language::En);
    // 0.10 * 3 is not exact in binary floating point
    store.add_to_cart(&item("a", 10), qty(3));
    store.add_to_cart(&item("b", 20), qty(1));

    assert_eq!(store.total(), Price::from_cents(50));
    assert_eq!(store.total().to_string(), "$0.50");
}

#[test]
fn test_lines_keep_insertion_order() {
    let mut store = CartStore::new(Language::En);
    for id in ["3", "1", "2"] {
        store.add_to_cart(&item(id, 100), qty(1));
    }
    store.add_to_cart(&item("1", 100), qty(1));

    let ids: Vec<&str> = store.cart().iter().map(|line| line.item.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
    assert_eq!(store.item_count(), 4);
}

// =============================================================================
// Unknown IDs and language
// =============================================================================

#[test]
fn test_unknown_ids_are_no_ops() {
    let mut store = CartStore::new(Language::En);
    store.add_to_cart(&item("1", 250), qty(2));
    let before = store.cart().to_vec();

    store.remove_from_cart(&"missing".into());
    store.update_cart_quantity(&"missing".into(), 5);

    assert_eq!(store.cart(), before.as_slice());
}

#[test]
fn test_language_survives_clear() {
    let mut store = CartStore::new(Language::En);
    store.set_language(Language::Th);
    store.add_to_cart(&item("1", 250), qty(1));

    store.clear_cart();

    assert!(store.is_empty());
    assert_eq!(store.language(), Language::Th);
}

#[test]
fn test_every_mutation_bumps_revision() {
    let mut store = CartStore::new(Language::En);
    let start = store.revision();

    store.add_to_cart(&item("1", 250), qty(1));
    store.update_cart_quantity(&"1".into(), 4);
    store.set_language(Language::Ja);
    store.clear_cart();

    assert_eq!(store.revision(), start + 4);
}
