//! BrewApp configuration and setup.

use std::cell::{Ref, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use brew_auth::{AuthError, SessionToken, UserStore};
use brew_commerce::catalog::Catalog;
use brew_commerce::money::Currency;
use brew_commerce::orders::OrderStatus;
use brew_commerce::store::{ShopStore, StoreEvent};
use brew_storage::{Storage, StorageError};
use tracing::info;

use crate::notifications::{Notification, NotificationFeed, NotificationKind};

/// Configuration for a BrewDash application.
#[derive(Debug, Clone)]
pub struct BrewConfig {
    /// Application name.
    pub name: String,
    /// Storefront currency.
    pub currency: Currency,
    /// Device storage file; `None` keeps storage in memory.
    pub storage_path: Option<PathBuf>,
}

impl Default for BrewConfig {
    fn default() -> Self {
        Self {
            name: "BrewDash".to_string(),
            currency: Currency::INR,
            storage_path: None,
        }
    }
}

impl BrewConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the storefront currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Persist device state to the given file.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }
}

/// The BrewDash application context.
///
/// Constructed once at process start; the single owner of the catalog,
/// the cart/order store, the user store, and the notification feed.
/// View code borrows what it renders and calls the operations here or
/// on the stores directly.
#[derive(Debug)]
pub struct BrewApp {
    config: BrewConfig,
    catalog: Catalog,
    shop: ShopStore,
    user: UserStore,
    notifications: Rc<RefCell<NotificationFeed>>,
}

impl BrewApp {
    /// Build the application: open device storage, restore the persisted
    /// auth state, and start with a fresh cart (the cart is session-local
    /// by design and never restored).
    ///
    /// The notification feed subscribes to the shop store, so order
    /// placement and delivery show up as in-app notifications.
    pub fn new(config: BrewConfig) -> Result<Self, StorageError> {
        let storage = match &config.storage_path {
            Some(path) => Storage::open(path)?,
            None => Storage::in_memory(),
        };
        let user = UserStore::hydrate(storage);
        let notifications = Rc::new(RefCell::new(NotificationFeed::seed_demo()));

        let mut shop = ShopStore::new(config.currency);
        let feed = Rc::clone(&notifications);
        shop.subscribe(move |event| match event {
            StoreEvent::OrderPlaced(id) => {
                feed.borrow_mut().post(Notification::new(
                    "Order Confirmed",
                    format!("Your order #{id} has been confirmed and is being prepared."),
                    NotificationKind::Neutral,
                ));
            }
            StoreEvent::OrderStatusChanged { id, status } if *status == OrderStatus::Delivered => {
                feed.borrow_mut().post(Notification::new(
                    "Order Delivered!",
                    format!("Your order #{id} has been delivered successfully."),
                    NotificationKind::Success,
                ));
            }
            _ => {}
        });

        info!(
            app = %config.name,
            authenticated = user.is_authenticated(),
            "application context ready"
        );
        Ok(Self {
            config,
            catalog: Catalog::demo(),
            shop,
            user,
            notifications,
        })
    }

    /// The application configuration.
    pub fn config(&self) -> &BrewConfig {
        &self.config
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart/order store.
    pub fn shop(&self) -> &ShopStore {
        &self.shop
    }

    /// The cart/order store, mutable.
    pub fn shop_mut(&mut self) -> &mut ShopStore {
        &mut self.shop
    }

    /// The user/auth store.
    pub fn user(&self) -> &UserStore {
        &self.user
    }

    /// The user/auth store, mutable.
    pub fn user_mut(&mut self) -> &mut UserStore {
        &mut self.user
    }

    /// The in-app notification feed.
    ///
    /// The borrow must be released before mutating the shop store, which
    /// posts to the feed from its subscriber.
    pub fn notifications(&self) -> Ref<'_, NotificationFeed> {
        self.notifications.borrow()
    }

    /// Sign in through the user store.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        self.user.login(email, password)
    }

    /// Sign out: clears the session and empties the cart.
    pub fn logout(&mut self) {
        self.user.logout();
        self.shop.clear_cart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_commerce::ids::ProductId;

    #[test]
    fn test_config_builder() {
        let config = BrewConfig::new("BrewDash")
            .with_currency(Currency::INR)
            .with_storage_path("/tmp/brewdash.json");

        assert_eq!(config.name, "BrewDash");
        assert_eq!(config.currency, Currency::INR);
        assert!(config.storage_path.is_some());
    }

    #[test]
    fn test_app_starts_with_demo_catalog_and_empty_cart() {
        let app = BrewApp::new(BrewConfig::default()).unwrap();

        assert!(!app.catalog().is_empty());
        assert!(app.shop().cart().is_empty());
        assert!(app.shop().orders().is_empty());
        assert!(!app.notifications().is_empty());
    }

    #[test]
    fn test_order_lifecycle_posts_notifications() {
        let mut app = BrewApp::new(BrewConfig::default()).unwrap();
        let seeded = app.notifications().len();

        let lager = app.catalog().require(&ProductId::new("1")).unwrap().clone();
        app.shop_mut().add_to_cart(&lager, 1).unwrap();
        let id = app.shop_mut().place_order().unwrap().unwrap();

        assert_eq!(app.notifications().len(), seeded + 1);
        assert_eq!(app.notifications().all()[0].title, "Order Confirmed");

        app.shop_mut().update_order_status(&id, OrderStatus::Delivered);
        assert_eq!(app.notifications().len(), seeded + 2);
        assert_eq!(app.notifications().all()[0].title, "Order Delivered!");
    }

    #[test]
    fn test_logout_clears_cart_but_not_orders() {
        let mut app = BrewApp::new(BrewConfig::default()).unwrap();
        app.login("jane@example.com", "hunter2").unwrap();

        let lager = app.catalog().require(&ProductId::new("1")).unwrap().clone();
        app.shop_mut().add_to_cart(&lager, 1).unwrap();
        app.shop_mut().place_order().unwrap().unwrap();
        app.shop_mut().add_to_cart(&lager, 2).unwrap();

        app.logout();

        assert!(!app.user().is_authenticated());
        assert!(app.shop().cart().is_empty());
        assert_eq!(app.shop().orders().len(), 1);
    }

    #[test]
    fn test_auth_survives_restart_cart_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("device.json");

        {
            let mut app = BrewApp::new(
                BrewConfig::default().with_storage_path(&path),
            )
            .unwrap();
            app.login("jane@example.com", "hunter2").unwrap();
            let lager = app.catalog().require(&ProductId::new("1")).unwrap().clone();
            app.shop_mut().add_to_cart(&lager, 3).unwrap();
        }

        let app = BrewApp::new(BrewConfig::default().with_storage_path(&path)).unwrap();
        assert!(app.user().is_authenticated());
        assert!(app.shop().cart().is_empty());
    }
}
