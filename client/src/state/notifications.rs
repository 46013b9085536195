//! Unread-count state behind the notification bell.
//!
//! DESIGN
//! ======
//! The unread count is only ever replaced wholesale from a successful fetch.
//! Failures leave it at the last known value; nothing increments or
//! decrements it locally.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::api::ApiError;
use crate::net::types::Notification;

/// Bell state owned by one `NotificationBell` instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub unread_count: usize,
    /// A fetch is outstanding; the bell is disabled meanwhile.
    pub in_flight: bool,
    pub last_error: Option<ApiError>,
}

impl NotificationState {
    /// Mark a fetch as started. Returns `false` when one is already running.
    pub fn begin_fetch(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Apply a fetch result and clear the in-flight flag.
    pub fn finish_fetch(&mut self, result: Result<Vec<Notification>, ApiError>) {
        self.in_flight = false;
        match result {
            Ok(notifications) => {
                self.unread_count = unread_count(&notifications);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e),
        }
    }

    /// Badge text; `None` hides the badge.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        (self.unread_count > 0).then(|| self.unread_count.to_string())
    }
}

/// Number of unread records in a fetched summary.
#[must_use]
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.is_unread()).count()
}
