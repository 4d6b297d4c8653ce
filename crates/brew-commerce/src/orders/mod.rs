//! Order history module.
//!
//! Contains immutable order snapshots and their delivery status.

mod order;

pub use order::{Order, OrderStatus};
