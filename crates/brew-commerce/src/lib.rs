//! Storefront domain types and logic for BrewDash.
//!
//! This crate provides the in-process core of the BrewDash storefront:
//!
//! - **Catalog**: the static product list and its categories
//! - **Browse**: in-memory filtering and sorting of the catalog
//! - **Cart**: the active cart and its line items
//! - **Orders**: immutable order snapshots with delivery status
//! - **Store**: the cart/order store that owns both collections and
//!   notifies subscribers after every effective mutation
//!
//! # Example
//!
//! ```rust,ignore
//! use brew_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let mut shop = ShopStore::new(Currency::INR);
//!
//! let lager = catalog.require(&ProductId::new("1"))?;
//! shop.add_to_cart(lager, 2)?;
//!
//! let order_id = shop.place_order()?.expect("cart was not empty");
//! println!("placed {order_id}, total {}", shop.orders()[0].total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod store;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Browse
    pub use crate::browse::{BrowseQuery, Filter, SortKey, SortOrder};

    // Cart
    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};

    // Orders
    pub use crate::orders::{Order, OrderStatus};

    // Store
    pub use crate::store::{ShopStore, StoreEvent};
}
