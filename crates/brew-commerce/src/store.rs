//! The cart/order store.
//!
//! `ShopStore` is the single owner of the active cart and the order
//! history for the lifetime of the process. Every mutation goes through
//! its operations; view code reads the exposed collections and may
//! subscribe to change notifications. The store is used from one logical
//! thread, so operations are plain `&mut self` calls with no locking.

use tracing::{debug, info};

use crate::cart::Cart;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Currency;
use crate::orders::{Order, OrderStatus};

/// A change notification emitted after an effective store mutation.
///
/// Events fire only once the state change is fully applied, and never
/// for no-ops (unknown ids, empty-cart clears or placements).
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A cart line was added, merged, decremented, or removed.
    CartChanged,
    /// The cart was emptied outside of order placement.
    CartCleared,
    /// An order was created from the cart.
    OrderPlaced(OrderId),
    /// An order's delivery status changed.
    OrderStatusChanged { id: OrderId, status: OrderStatus },
}

type Subscriber = Box<dyn Fn(&StoreEvent)>;

/// The cart/order store.
pub struct ShopStore {
    cart: Cart,
    orders: Vec<Order>,
    subscribers: Vec<Subscriber>,
}

impl ShopStore {
    /// Create an empty store in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            orders: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Register an observer for store events.
    ///
    /// Subscribers are invoked synchronously, in registration order,
    /// after each effective mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add a catalog item to the cart.
    ///
    /// Merges into an existing line for the same product (the existing
    /// line's price and metadata win), otherwise appends a new line.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity_delta: u32,
    ) -> Result<(), CommerceError> {
        self.cart.add(product, quantity_delta)?;
        debug!(product = %product.id, quantity_delta, "added to cart");
        self.notify(&StoreEvent::CartChanged);
        Ok(())
    }

    /// Decrease a line's quantity by one, removing the line at quantity 1.
    ///
    /// Unknown ids are a silent no-op; returns whether anything changed.
    pub fn remove_one_from_cart(&mut self, id: &ProductId) -> bool {
        let changed = self.cart.remove_one(id);
        if changed {
            debug!(product = %id, "removed one from cart");
            self.notify(&StoreEvent::CartChanged);
        }
        changed
    }

    /// Remove an entire line regardless of quantity.
    ///
    /// Unknown ids are a silent no-op; returns whether anything changed.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let changed = self.cart.remove(id);
        if changed {
            debug!(product = %id, "removed line from cart");
            self.notify(&StoreEvent::CartChanged);
        }
        changed
    }

    /// Empty the cart. Used on logout.
    pub fn clear_cart(&mut self) {
        if self.cart.is_empty() {
            return;
        }
        self.cart.clear();
        debug!("cart cleared");
        self.notify(&StoreEvent::CartCleared);
    }

    /// Place an order from the current cart.
    ///
    /// Returns `Ok(None)` without creating anything when the cart is
    /// empty; callers are expected to pre-validate for user-facing
    /// messaging. Otherwise the total is computed from the current
    /// lines, the lines move into a new pending order at the head of
    /// the history (most recent first), and the cart is left empty.
    ///
    /// The total is computed before the cart is touched, so a failed
    /// checked sum leaves the store unchanged.
    pub fn place_order(&mut self) -> Result<Option<OrderId>, CommerceError> {
        if self.cart.is_empty() {
            debug!("place_order on empty cart ignored");
            return Ok(None);
        }

        let total = self.cart.subtotal()?;
        let lines = self.cart.take_lines();
        let order = Order::place(lines, total);
        let id = order.id.clone();

        self.orders.insert(0, order);
        info!(order = %id, total = %total, "order placed");
        self.notify(&StoreEvent::OrderPlaced(id.clone()));
        Ok(Some(id))
    }

    /// Update an order's delivery status.
    ///
    /// Unknown ids are a silent no-op. Transitions are forward-only:
    /// regressing a delivered order is rejected. Setting the current
    /// status again succeeds without emitting an event. Returns whether
    /// the status now matches the request.
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| &o.id == id) else {
            debug!(order = %id, "status update for unknown order ignored");
            return false;
        };
        if !order.status.can_transition_to(status) {
            debug!(
                order = %id,
                from = order.status.as_str(),
                to = status.as_str(),
                "status regression rejected"
            );
            return false;
        }
        if order.status == status {
            return true;
        }

        order.status = status;
        info!(order = %id, status = status.as_str(), "order status updated");
        self.notify(&StoreEvent::OrderStatusChanged {
            id: id.clone(),
            status,
        });
        true
    }

    /// The active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Get an order by id.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    fn notify(&self, event: &StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopStore")
            .field("cart", &self.cart)
            .field("orders", &self.orders)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str, name: &str, major: i64) -> Product {
        Product::new(id, name, "lager", Money::from_major(major, Currency::INR))
    }

    fn store_with_events() -> (ShopStore, Rc<RefCell<Vec<StoreEvent>>>) {
        let mut store = ShopStore::new(Currency::INR);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        (store, events)
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let (mut store, events) = store_with_events();
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(&*events.borrow(), &[StoreEvent::CartChanged]);
    }

    #[test]
    fn test_removal_noop_emits_nothing() {
        let (mut store, events) = store_with_events();

        assert!(!store.remove_one_from_cart(&ProductId::new("404")));
        assert!(!store.remove_from_cart(&ProductId::new("404")));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_clear_empty_cart_emits_nothing() {
        let (mut store, events) = store_with_events();
        store.clear_cart();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_place_order_empty_cart_is_noop() {
        let (mut store, events) = store_with_events();

        let placed = store.place_order().unwrap();
        assert!(placed.is_none());
        assert!(store.orders().is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let (mut store, events) = store_with_events();
        store.add_to_cart(&product("1", "Golden Lager", 299), 2).unwrap();
        store.add_to_cart(&product("2", "Hoppy Trails IPA", 349), 1).unwrap();
        let lines_before = store.cart().lines().to_vec();

        let id = store.place_order().unwrap().expect("cart was not empty");

        assert!(store.cart().is_empty());
        let order = store.order(&id).unwrap();
        assert_eq!(order.lines, lines_before);
        assert_eq!(order.total.amount_minor, 2 * 29900 + 34900);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(
            events.borrow().last(),
            Some(&StoreEvent::OrderPlaced(id.clone()))
        );
    }

    #[test]
    fn test_orders_are_most_recent_first() {
        let mut store = ShopStore::new(Currency::INR);

        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let first = store.place_order().unwrap().unwrap();

        store.add_to_cart(&product("2", "Hoppy Trails IPA", 349), 1).unwrap();
        let second = store.place_order().unwrap().unwrap();

        assert_eq!(store.orders().len(), 2);
        assert_eq!(store.orders()[0].id, second);
        assert_eq!(store.orders()[1].id, first);
    }

    #[test]
    fn test_cart_mutation_after_placement_leaves_order_alone() {
        let mut store = ShopStore::new(Currency::INR);
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let id = store.place_order().unwrap().unwrap();
        let snapshot = store.order(&id).unwrap().clone();

        store.add_to_cart(&product("1", "Golden Lager", 299), 5).unwrap();
        store.remove_one_from_cart(&ProductId::new("1"));

        assert_eq!(store.order(&id).unwrap(), &snapshot);
    }

    #[test]
    fn test_update_order_status() {
        let (mut store, events) = store_with_events();
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let id = store.place_order().unwrap().unwrap();

        assert!(store.update_order_status(&id, OrderStatus::Delivered));
        assert!(store.order(&id).unwrap().is_delivered());
        assert_eq!(
            events.borrow().last(),
            Some(&StoreEvent::OrderStatusChanged {
                id: id.clone(),
                status: OrderStatus::Delivered,
            })
        );
    }

    #[test]
    fn test_update_order_status_only_touches_match() {
        let mut store = ShopStore::new(Currency::INR);
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let first = store.place_order().unwrap().unwrap();
        store.add_to_cart(&product("2", "Hoppy Trails IPA", 349), 1).unwrap();
        let second = store.place_order().unwrap().unwrap();

        store.update_order_status(&first, OrderStatus::Delivered);

        assert!(store.order(&first).unwrap().is_delivered());
        assert_eq!(store.order(&second).unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_order_status_unknown_id_is_noop() {
        let (mut store, events) = store_with_events();
        assert!(!store.update_order_status(&OrderId::new("404"), OrderStatus::Delivered));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_update_order_status_rejects_regression() {
        let mut store = ShopStore::new(Currency::INR);
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let id = store.place_order().unwrap().unwrap();
        store.update_order_status(&id, OrderStatus::Delivered);

        assert!(!store.update_order_status(&id, OrderStatus::Pending));
        assert!(store.order(&id).unwrap().is_delivered());
    }

    #[test]
    fn test_update_order_status_same_status_is_idempotent() {
        let (mut store, events) = store_with_events();
        store.add_to_cart(&product("1", "Golden Lager", 299), 1).unwrap();
        let id = store.place_order().unwrap().unwrap();
        store.update_order_status(&id, OrderStatus::Delivered);
        let emitted = events.borrow().len();

        assert!(store.update_order_status(&id, OrderStatus::Delivered));
        assert_eq!(events.borrow().len(), emitted);
    }
}
