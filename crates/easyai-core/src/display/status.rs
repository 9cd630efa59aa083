//! Display for transient notifications.

use std::fmt;

use crate::models::{Notification, NotificationKind};

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "Success:"),
            NotificationKind::Error => write!(f, "Error:"),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.kind, self.message)
    }
}
