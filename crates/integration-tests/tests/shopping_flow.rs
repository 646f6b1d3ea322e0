//! End-to-end shopping flow over a file-backed profile.
//!
//! Drives the stores the way a view layer would: sign in, fill the cart,
//! check out, and verify that every slice survives a reload from disk.

use fluxtrade_core::{Money, OrderStatus, ProductId, UserRole};
use fluxtrade_integration_tests::TestProfile;
use fluxtrade_store::models::{OrderAddress, PlaceOrderPayload};
use fluxtrade_store::shop::CartLine;

fn checkout_payload(items: Vec<fluxtrade_store::models::OrderItem>) -> PlaceOrderPayload {
    PlaceOrderPayload {
        items,
        shipping: Some(Money::from_units(12)),
        payment_method: "Visa 4242".to_string(),
        address: OrderAddress {
            full_name: "Mia Bennett".to_string(),
            line1: "123 Waverly Ave".to_string(),
            line2: None,
            city: "Quezon City".to_string(),
            region: "Metro Manila".to_string(),
            postal_code: "1105".to_string(),
            country: "Philippines".to_string(),
            contact_number: "+63 917 555 2103".to_string(),
        },
        ..PlaceOrderPayload::default()
    }
}

#[test]
fn full_flow_survives_reload() {
    let profile = TestProfile::new();

    // --- Session 1: sign in, shop, check out ---
    let mut auth = profile.auth();
    auth.login(
        UserRole::User,
        Some("Mia Bennett".to_string()),
        Some("mia.bennett@example.test".to_string()),
    );

    let mut shop = profile.shop();
    let laptop = ProductId::new(1);
    let headphones = ProductId::new(2);
    shop.add_to_cart(laptop);
    shop.add_to_cart(laptop);
    shop.add_to_cart(headphones);
    shop.toggle_favorite(headphones);

    let view = shop.cart_view(&profile.catalog);
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.item_count, 3);
    // 2 x 1899 + 329
    assert_eq!(view.subtotal, Money::from_units(4127));

    let items = view.lines.iter().map(CartLine::to_order_item).collect();
    let placed = shop
        .place_order(checkout_payload(items))
        .expect("cart was not empty");

    assert!(shop.cart_ids().is_empty());
    assert_eq!(placed.status, OrderStatus::Processing);

    // --- Session 2: a fresh process over the same profile ---
    let shop = profile.shop();
    let auth = profile.auth();

    assert!(auth.is_authenticated());
    assert_eq!(auth.role(), Some(UserRole::User));
    assert!(shop.cart_ids().is_empty());
    assert!(shop.is_favorite(headphones));

    let restored = shop.orders().first().expect("order history is not empty");
    assert_eq!(restored.id, placed.id);
    assert_eq!(restored.reference, placed.reference);
    assert_eq!(restored.total, placed.total);
    assert_eq!(restored.items.len(), 2);
    assert_eq!(restored.events.len(), 1);
}

#[test]
fn order_snapshot_is_frozen_at_placement() {
    let profile = TestProfile::new();
    let mut shop = profile.shop();

    let id = ProductId::new(5);
    let product = profile.catalog.get(id).expect("product exists");
    shop.add_to_cart(id);

    let items = shop
        .cart_view(&profile.catalog)
        .lines
        .iter()
        .map(CartLine::to_order_item)
        .collect();
    let placed = shop.place_order(checkout_payload(items)).expect("placed");

    // The snapshot carries the name and unit price as of placement time
    assert_eq!(placed.items[0].product_id, id);
    assert_eq!(placed.items[0].name, product.name);
    assert_eq!(placed.items[0].price, product.price);
    assert_eq!(placed.items[0].quantity, 1);
}

#[test]
fn money_breakdown_matches_worked_example() {
    use fluxtrade_core::ProductId;
    use fluxtrade_store::models::OrderItem;

    let profile = TestProfile::new();
    let mut shop = profile.shop();

    let items = vec![
        OrderItem {
            product_id: ProductId::new(1),
            name: "A".to_string(),
            image: String::new(),
            price: Money::from_units(100),
            quantity: 2,
        },
        OrderItem {
            product_id: ProductId::new(2),
            name: "B".to_string(),
            image: String::new(),
            price: Money::from_units(50),
            quantity: 1,
        },
    ];

    let placed = shop
        .place_order(PlaceOrderPayload {
            items,
            shipping: Some(Money::from_units(12)),
            payment_method: "GCash".to_string(),
            ..PlaceOrderPayload::default()
        })
        .expect("placed");

    assert_eq!(placed.subtotal, Money::from_units(250));
    assert_eq!(placed.tax, Money::from_units(30));
    assert_eq!(placed.total, Money::from_units(292));
}

#[test]
fn logout_is_visible_to_next_session() {
    let profile = TestProfile::new();

    let mut auth = profile.auth();
    auth.login(UserRole::Admin, Some("Ops".to_string()), None);
    auth.logout();

    let auth = profile.auth();
    assert!(!auth.is_authenticated());
}
