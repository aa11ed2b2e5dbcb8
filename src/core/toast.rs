//! # Toast
//!
//! A transient status message with a single expiry deadline. The slot holds
//! at most one toast, so showing a new one replaces (and thereby cancels)
//! the previous deadline. Every way of clearing goes through `Option::take`,
//! which makes a second clear of the same toast a no-op.

use chrono::{DateTime, Duration, Utc};
use log::debug;

/// Default lifetime of a toast.
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Why a toast went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastClear {
    Expired,
    Dismissed,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Utc>, timeout: Duration) {
        let message = message.into();
        if let Some(previous) = self.current.take() {
            debug!("Toast replaced before expiry: {:?}", previous.message);
        }
        debug!("Toast shown: {:?}", message);
        // Huge configured timeouts saturate to "never expires".
        let expires_at = now
            .checked_add_signed(timeout)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.current = Some(Toast {
            message,
            expires_at,
        });
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the toast if its deadline has passed. Returns the cleared toast.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Option<Toast> {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            return self.clear(ToastClear::Expired);
        }
        None
    }

    pub fn dismiss(&mut self) -> Option<Toast> {
        self.clear(ToastClear::Dismissed)
    }

    /// Drops the pending deadline on teardown.
    pub fn cancel(&mut self) -> Option<Toast> {
        self.clear(ToastClear::Cancelled)
    }

    /// Time left until the pending deadline, zero if already due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        self.current
            .as_ref()
            .map(|t| (t.expires_at - now).to_std().unwrap_or_default())
    }

    fn clear(&mut self, reason: ToastClear) -> Option<Toast> {
        let cleared = self.current.take();
        if let Some(toast) = &cleared {
            debug!("Toast cleared ({:?}): {:?}", reason, toast.message);
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at;

    fn timeout() -> Duration {
        Duration::milliseconds(DEFAULT_TOAST_TIMEOUT_MS as i64)
    }

    #[test]
    fn test_expires_exactly_at_deadline_once() {
        let mut slot = ToastSlot::default();
        slot.show("Saved", at(0), timeout());

        assert!(slot.expire(at(1_999)).is_none());
        assert!(slot.is_visible());

        let cleared = slot.expire(at(2_000));
        assert_eq!(cleared.map(|t| t.message), Some("Saved".to_string()));
        assert!(!slot.is_visible());

        assert!(slot.expire(at(2_001)).is_none());
        assert!(slot.dismiss().is_none());
    }

    #[test]
    fn test_new_toast_replaces_pending_deadline() {
        let mut slot = ToastSlot::default();
        slot.show("first", at(0), timeout());
        slot.show("second", at(1_500), timeout());

        assert!(slot.expire(at(2_000)).is_none(), "first deadline was cancelled");
        assert_eq!(slot.current().map(|t| t.message.as_str()), Some("second"));
        assert!(slot.expire(at(3_500)).is_some());
    }

    #[test]
    fn test_dismiss_then_expiry_does_not_double_clear() {
        let mut slot = ToastSlot::default();
        slot.show("bye", at(0), timeout());
        assert!(slot.dismiss().is_some());
        assert!(slot.expire(at(5_000)).is_none());
    }

    #[test]
    fn test_remaining() {
        let mut slot = ToastSlot::default();
        assert_eq!(slot.remaining(at(0)), None);
        slot.show("x", at(0), timeout());
        assert_eq!(
            slot.remaining(at(500)),
            Some(std::time::Duration::from_millis(1_500))
        );
        assert_eq!(slot.remaining(at(9_000)), Some(std::time::Duration::ZERO));
        assert!(slot.cancel().is_some());
        assert_eq!(slot.remaining(at(0)), None);
    }

    #[test]
    fn test_oversized_timeout_saturates() {
        let mut slot = ToastSlot::default();
        slot.show("forever", at(0), Duration::milliseconds(i64::MAX));

        let toast = slot.current().unwrap();
        assert_eq!(toast.expires_at, DateTime::<Utc>::MAX_UTC);
        assert!(slot.expire(at(1_000_000_000)).is_none());
        assert!(slot.remaining(at(0)).is_some_and(|d| d > std::time::Duration::from_secs(1)));
    }
}
