//! Order types.

use crate::cart::CartLine;
use crate::ids::OrderId;
use crate::money::Money;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Order delivery status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting delivery.
    #[default]
    Pending,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Check whether this status may move to `next`.
    ///
    /// Transitions are forward-only: a delivered order never goes back
    /// to pending. Setting the current status again is allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        *self == next || !self.is_terminal()
    }
}

/// An immutable snapshot of a completed checkout.
///
/// Orders are created only by order placement and change only through
/// the store's status-update operation; the line collection and total
/// are fixed at placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The cart lines at the moment of placement, copied by value.
    pub lines: Vec<CartLine>,
    /// Total charged, computed once at placement.
    pub total: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
    /// Human-readable placement time, formatted once at creation.
    pub date: String,
    /// Delivery status.
    pub status: OrderStatus,
}

impl Order {
    /// Create a pending order from the lines and total of a checkout.
    pub(crate) fn place(lines: Vec<CartLine>, total: Money) -> Self {
        let now = Local::now();
        Self {
            id: OrderId::generate(),
            lines,
            total,
            placed_at: now.timestamp(),
            date: now.format("%d %b %Y, %I:%M %p").to_string(),
            status: OrderStatus::Pending,
        }
    }

    /// Total item count (sum of line quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if the order has been delivered.
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}
