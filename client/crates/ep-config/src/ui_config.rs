use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3_000;

pub const MIN_MAX_NOTIFICATIONS: usize = 1;
pub const MAX_MAX_NOTIFICATIONS: usize = 10;
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 3;

/// Notification behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays visible before auto-dismissal
    pub notification_duration_ms: u64,
    /// Oldest notifications are evicted beyond this count
    pub max_notifications: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.notification_duration_ms < MIN_NOTIFICATION_DURATION_MS
            || self.notification_duration_ms > MAX_NOTIFICATION_DURATION_MS
        {
            return Err(ConfigError::invalid(
                "ui.notification_duration_ms",
                format!(
                    "must be {MIN_NOTIFICATION_DURATION_MS}-{MAX_NOTIFICATION_DURATION_MS}, got {}",
                    self.notification_duration_ms
                ),
            ));
        }

        if self.max_notifications < MIN_MAX_NOTIFICATIONS
            || self.max_notifications > MAX_MAX_NOTIFICATIONS
        {
            return Err(ConfigError::invalid(
                "ui.max_notifications",
                format!(
                    "must be {MIN_MAX_NOTIFICATIONS}-{MAX_MAX_NOTIFICATIONS}, got {}",
                    self.max_notifications
                ),
            ));
        }

        Ok(())
    }
}
