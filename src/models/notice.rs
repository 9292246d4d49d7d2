//! Toast message types shown by the notification stack.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::toast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
    /// Spinner message; stays until replaced by key or dismissed
    Loading,
}

impl ToastLevel {
    /// Default auto-dismiss delay, `None` for sticky toasts.
    pub fn default_duration_ms(self) -> Option<u32> {
        match self {
            Self::Info | Self::Success => Some(toast::SHORT_MS),
            Self::Warning | Self::Error => Some(toast::ERROR_MS),
            Self::Loading => None,
        }
    }
}

/// A short message in the top toast stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique per toast instance, used for timed dismissal
    pub id: u64,
    /// Optional replacement key: a new toast with the same key replaces this one
    pub key: Option<String>,
    pub level: ToastLevel,
    pub message: String,
    pub duration_ms: Option<u32>,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT.fetch_add(1, Ordering::Relaxed),
            key: None,
            level,
            message: message.into(),
            duration_ms: level.default_duration_ms(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

/// Insert `toast`, replacing any toast that carries the same key.
pub fn upsert_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    if let Some(key) = toast.key.as_deref()
        && let Some(existing) = toasts.iter_mut().find(|t| t.key.as_deref() == Some(key))
    {
        *existing = toast;
        return;
    }
    toasts.push(toast);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        assert_eq!(Toast::new(ToastLevel::Info, "x").duration_ms, Some(3000));
        assert_eq!(Toast::new(ToastLevel::Error, "x").duration_ms, Some(5000));
        assert_eq!(Toast::new(ToastLevel::Loading, "x").duration_ms, None);
        assert_eq!(
            Toast::new(ToastLevel::Info, "x").with_duration(10).duration_ms,
            Some(10)
        );
    }

    #[test]
    fn test_upsert_replaces_by_key() {
        let mut toasts = Vec::new();
        upsert_toast(
            &mut toasts,
            Toast::new(ToastLevel::Loading, "Loading").with_key("/etc/hosts"),
        );
        upsert_toast(&mut toasts, Toast::new(ToastLevel::Info, "unrelated"));
        upsert_toast(
            &mut toasts,
            Toast::new(ToastLevel::Success, "Loaded").with_key("/etc/hosts"),
        );

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].level, ToastLevel::Success);
        assert_eq!(toasts[0].message, "Loaded");
    }
}
