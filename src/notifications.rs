// ABOUTME: Notification module for the exchange-site library
// ABOUTME: Manages toast messages that dismiss themselves after a fixed duration

use crate::timeline::{TimerHandle, Timeline};
use log::{debug, info};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "info-circle",
            ToastKind::Success => "check-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Error => "exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    expiry: TimerHandle,
}

#[derive(Debug)]
pub struct Notifier {
    default_duration: Duration,
    timeline: Timeline<ToastId>,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifier {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            default_duration,
            timeline: Timeline::new(),
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Show a toast for the default duration
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.show_for(message, kind, self.default_duration)
    }

    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        info!("[{}] {}", kind.css_class(), message);

        let expiry = self.timeline.schedule_once(duration, id);
        self.toasts.push(Toast {
            id,
            message,
            kind,
            expiry,
        });
        id
    }

    /// Close a toast early (the close button)
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.toasts.iter().position(|toast| toast.id == id) {
            Some(position) => {
                let toast = self.toasts.remove(position);
                self.timeline.cancel(toast.expiry);
                true
            }
            None => false,
        }
    }

    /// Let time pass and return the toasts that expired
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ToastId> {
        let until = self.timeline.now() + elapsed;
        let mut expired = Vec::new();
        while let Some((_, id)) = self.timeline.pop_due(until) {
            self.toasts.retain(|toast| toast.id != id);
            debug!("Toast {:?} expired", id);
            expired.push(id);
        }
        self.timeline.settle(until);
        expired
    }

    /// Simulated time the notifier has reached
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let mut notifier = Notifier::new(Duration::from_millis(5000));
        let id = notifier.show("hello", ToastKind::Info);

        assert!(notifier.advance(Duration::from_millis(4999)).is_empty());
        assert_eq!(notifier.visible().len(), 1);
        assert_eq!(notifier.advance(Duration::from_millis(1)), vec![id]);
        assert!(notifier.visible().is_empty());
    }

    #[test]
    fn test_dismiss_cancels_expiry() {
        let mut notifier = Notifier::new(Duration::from_millis(5000));
        let id = notifier.show("bye", ToastKind::Error);

        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
        assert!(notifier.advance(Duration::from_millis(10_000)).is_empty());
    }

    #[test]
    fn test_custom_duration() {
        let mut notifier = Notifier::new(Duration::from_millis(5000));
        notifier.show_for("short", ToastKind::Warning, Duration::from_millis(1000));
        let long = notifier.show("long", ToastKind::Success);

        notifier.advance(Duration::from_millis(1000));
        assert_eq!(notifier.visible().len(), 1);
        assert_eq!(notifier.latest().map(|t| t.id), Some(long));
    }
}
