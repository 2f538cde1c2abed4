//! Poll state
//!
//! Remembers what was last notified so repeated polls of an unchanged
//! homework stay quiet, and which failure text was last reported so a
//! recurring error is only sent once.

use super::homework::TrackedItem;

/// State carried by the poll loop between cycles
///
/// Reflects the most recently *notified* homework, not the most recently
/// observed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    last_notified_name: String,
    last_notified_status: String,
    last_error_message: Option<String>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `item` differs from the last notified homework
    pub fn should_notify(&self, item: &TrackedItem) -> bool {
        self.last_notified_name != item.name() || self.last_notified_status != item.raw_status()
    }

    /// Records `item` as notified
    ///
    /// Only call after the notification was delivered.
    pub fn commit(&mut self, item: &TrackedItem) {
        self.last_notified_name = item.name().to_string();
        self.last_notified_status = item.raw_status().to_string();
    }

    pub fn last_notified(&self) -> Option<(&str, &str)> {
        if self.last_notified_name.is_empty() && self.last_notified_status.is_empty() {
            return None;
        }
        Some((self.last_notified_name.as_str(), self.last_notified_status.as_str()))
    }

    /// Returns true when `message` was not the last reported failure
    pub fn should_report_error(&self, message: &str) -> bool {
        self.last_error_message.as_deref() != Some(message)
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error_message = Some(message.into());
    }

    /// Re-arms failure reporting after a clean cycle
    pub fn clear_error(&mut self) {
        self.last_error_message = None;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
