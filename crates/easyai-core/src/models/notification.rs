//! Transient notifications reporting the outcome of background email
//! delivery.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

/// How long a notification stays visible after it is raised.
pub const NOTIFICATION_TTL: SignedDuration = SignedDuration::from_secs(5);

/// Outcome carried by a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message that auto-dismisses after [`NOTIFICATION_TTL`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,

    /// When the notification was raised (UTC)
    pub raised_at: Timestamp,
}

impl Notification {
    /// Create a success notification raised now.
    pub fn success(message: impl Into<String>) -> Self {
        Self::raised_at(NotificationKind::Success, message, Timestamp::now())
    }

    /// Create an error notification raised now.
    pub fn error(message: impl Into<String>) -> Self {
        Self::raised_at(NotificationKind::Error, message, Timestamp::now())
    }

    /// Create a notification with an explicit raise time.
    pub fn raised_at(kind: NotificationKind, message: impl Into<String>, at: Timestamp) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at: at,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// Whether the notification is still shown at `now`.
    ///
    /// A notification is visible from the moment it is raised until the TTL
    /// has fully elapsed.
    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        let elapsed = now.duration_since(self.raised_at);
        !elapsed.is_negative() && elapsed < NOTIFICATION_TTL
    }
}
