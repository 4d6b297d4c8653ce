//! In-app notification feed.

use brew_commerce::ids::NotificationId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Visual tone of a notification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NotificationKind {
    /// Good news (a delivery, a completed order).
    Success,
    /// Promotional or informational.
    Info,
    /// Everything else.
    #[default]
    Neutral,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Neutral => "neutral",
        }
    }
}

/// An in-app notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// Card title.
    pub title: String,
    /// Card body text.
    pub body: String,
    /// Unix timestamp of posting.
    pub posted_at: i64,
    /// Visual tone.
    pub kind: NotificationKind,
}

impl Notification {
    /// Create a notification posted now.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: NotificationId::generate(),
            title: title.into(),
            body: body.into(),
            posted_at: Utc::now().timestamp(),
            kind,
        }
    }

    /// Relative age for display, e.g. "2 hours ago".
    pub fn age_display(&self, now: i64) -> String {
        let secs = (now - self.posted_at).max(0);
        match secs {
            0..=59 => "just now".to_string(),
            60..=3599 => {
                let mins = secs / 60;
                format!("{mins} minute{} ago", plural(mins))
            }
            3600..=86_399 => {
                let hours = secs / 3600;
                format!("{hours} hour{} ago", plural(hours))
            }
            _ => {
                let days = secs / 86_400;
                format!("{days} day{} ago", plural(days))
            }
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// The notification feed, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notification at the head of the feed.
    pub fn post(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// All notifications, newest first.
    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Check if the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// The feed a fresh install starts with.
    pub fn seed_demo() -> Self {
        let now = Utc::now().timestamp();
        let backdated = |hours_ago: i64, mut n: Notification| {
            n.posted_at = now - hours_ago * 3600;
            n
        };

        let mut feed = Self::new();
        feed.post(backdated(
            48,
            Notification::new(
                "Order Confirmed",
                "Your order #BD12344 has been confirmed and is being prepared.",
                NotificationKind::Neutral,
            ),
        ));
        feed.post(backdated(
            24,
            Notification::new(
                "New Craft Beer Available",
                "Check out our latest IPA collection with 20% off!",
                NotificationKind::Info,
            ),
        ));
        feed.post(backdated(
            2,
            Notification::new(
                "Order Delivered!",
                "Your order #BD12345 has been delivered successfully.",
                NotificationKind::Success,
            ),
        ));
        feed
    }
}
