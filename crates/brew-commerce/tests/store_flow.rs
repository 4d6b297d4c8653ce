//! End-to-end storefront flow against the public API.

use brew_commerce::prelude::*;

#[test]
fn browse_add_adjust_checkout_deliver() {
    let catalog = Catalog::demo();
    let mut shop = ShopStore::new(Currency::INR);

    // Browse for a lager, cheapest first.
    let query = BrowseQuery::new()
        .with_filter(Filter::category("lager"))
        .with_sort(SortKey::Price, SortOrder::Asc);
    let listing = query.apply(catalog.products());
    assert!(!listing.is_empty());

    let lager = catalog.require(&ProductId::new("1")).unwrap();

    // Add the same product twice; the line merges.
    shop.add_to_cart(lager, 1).unwrap();
    shop.add_to_cart(lager, 1).unwrap();
    assert_eq!(shop.cart().len(), 1);
    assert_eq!(shop.cart().get(&lager.id).unwrap().quantity, 2);

    // Take one back out.
    shop.remove_one_from_cart(&lager.id);
    assert_eq!(shop.cart().get(&lager.id).unwrap().quantity, 1);

    // Checkout.
    let order_id = shop.place_order().unwrap().expect("cart was not empty");
    assert!(shop.cart().is_empty());

    let order = shop.order(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].product_id, lager.id);
    assert_eq!(order.lines[0].quantity, 1);
    assert_eq!(order.total, Money::from_major(299, Currency::INR));
    assert!(!order.date.is_empty());

    // Delivery arrives.
    assert!(shop.update_order_status(&order_id, OrderStatus::Delivered));
    assert!(shop.orders()[0].is_delivered());
}

#[test]
fn placed_orders_are_isolated_from_later_shopping() {
    let catalog = Catalog::demo();
    let mut shop = ShopStore::new(Currency::INR);

    let ipa = catalog.require(&ProductId::new("2")).unwrap();
    let stout = catalog.require(&ProductId::new("3")).unwrap();

    shop.add_to_cart(ipa, 2).unwrap();
    let order_id = shop.place_order().unwrap().unwrap();
    let placed = shop.order(&order_id).unwrap().clone();

    // A whole new shopping session, including re-adding the same product.
    shop.add_to_cart(ipa, 4).unwrap();
    shop.add_to_cart(stout, 1).unwrap();
    shop.remove_from_cart(&stout.id);
    shop.clear_cart();

    assert_eq!(shop.order(&order_id).unwrap(), &placed);
}

#[test]
fn logout_style_clear_preserves_order_history() {
    let catalog = Catalog::demo();
    let mut shop = ShopStore::new(Currency::INR);

    let wheat = catalog.require(&ProductId::new("4")).unwrap();
    shop.add_to_cart(wheat, 1).unwrap();
    shop.place_order().unwrap().unwrap();

    shop.add_to_cart(wheat, 3).unwrap();
    shop.clear_cart();

    assert!(shop.cart().is_empty());
    assert_eq!(shop.orders().len(), 1);
}
