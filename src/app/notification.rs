//! Transient success/error notifications.
//!
//! A notification carries its own expiry timestamp. The handler schedules a
//! Zellij timer when one is raised and drops it on the first tick past expiry.

/// Severity of a notification, which picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissible message shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,

    /// Unix timestamp in milliseconds after which the message is dropped.
    pub expires_at_ms: i64,
}

impl Notification {
    /// Creates a success notification visible for `ttl_secs` from `now_ms`.
    pub fn success(message: impl Into<String>, now_ms: i64, ttl_secs: u32) -> Self {
        Self::new(NotificationKind::Success, message.into(), now_ms, ttl_secs)
    }

    /// Creates an error notification visible for `ttl_secs` from `now_ms`.
    pub fn error(message: impl Into<String>, now_ms: i64, ttl_secs: u32) -> Self {
        Self::new(NotificationKind::Error, message.into(), now_ms, ttl_secs)
    }

    fn new(kind: NotificationKind, message: String, now_ms: i64, ttl_secs: u32) -> Self {
        Self {
            kind,
            message,
            expires_at_ms: now_ms.saturating_add(i64::from(ttl_secs) * 1000),
        }
    }

    /// Whether the notification should be gone at `now_ms`.
    #[must_use]
    pub const fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// Current wall-clock time in Unix milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
