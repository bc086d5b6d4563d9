use crate::{Notification, NotificationKind};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ep_config::UiConfig;
use log::debug;

/// Bounded queue of auto-dismissing notifications.
///
/// Holds at most `max_visible` entries; pushing past the limit evicts the
/// oldest. Entries older than their auto-hide duration are pruned lazily.
#[derive(Debug)]
pub struct Notifier {
    entries: VecDeque<Notification>,
    max_visible: usize,
    auto_hide: Duration,
}

impl Notifier {
    pub fn new(max_visible: usize, auto_hide: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_visible),
            max_visible: max_visible.max(1),
            auto_hide,
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(
            config.max_notifications,
            Duration::from_millis(config.notification_duration_ms),
        )
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let notification = Notification {
            kind,
            message: message.into(),
            shown_at: now,
            auto_hide: self.auto_hide,
        };
        debug!("Notify {notification}");

        self.entries.push_back(notification);
        while self.entries.len() > self.max_visible {
            self.entries.pop_front();
        }
    }

    /// Notifications still on screen at `now`, oldest first
    pub fn visible(&mut self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.entries.retain(|n| !n.is_expired(now));
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Take every pending notification regardless of age
    pub fn drain(&mut self) -> Vec<Notification> {
        self.entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
