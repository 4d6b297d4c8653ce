//! Application context and wiring for BrewDash.
//!
//! Builds the stores once at process start and hands out borrows, so
//! there is exactly one owner of all storefront state and no global
//! singletons. Also hosts the in-app notification feed.

mod app;
mod notifications;

pub use app::{BrewApp, BrewConfig};
pub use notifications::{Notification, NotificationFeed, NotificationKind};
