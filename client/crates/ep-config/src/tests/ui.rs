use crate::tests::{EnvGuard, setup_config_dir};
use crate::{
    Config, MAX_MAX_NOTIFICATIONS, MAX_NOTIFICATION_DURATION_MS, MIN_MAX_NOTIFICATIONS,
    MIN_NOTIFICATION_DURATION_MS, UiConfig,
};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
fn test_ui_bounds_accepted() {
    let low = UiConfig {
        notification_duration_ms: MIN_NOTIFICATION_DURATION_MS,
        max_notifications: MIN_MAX_NOTIFICATIONS,
    };
    let high = UiConfig {
        notification_duration_ms: MAX_NOTIFICATION_DURATION_MS,
        max_notifications: MAX_MAX_NOTIFICATIONS,
    };
    assert_that!(low.validate(), ok(anything()));
    assert_that!(high.validate(), ok(anything()));
}

#[test]
fn test_zero_notifications_rejected() {
    let config = UiConfig {
        max_notifications: 0,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn test_duration_too_short_rejected() {
    let config = UiConfig {
        notification_duration_ms: MIN_NOTIFICATION_DURATION_MS - 1,
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_duration_env_when_load_then_notification_duration_matches() {
    // Given
    let _temp = setup_config_dir();
    let _ms = EnvGuard::set("EP_UI_NOTIFICATION_DURATION_MS", "1500");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.notification_duration(), eq(Duration::from_millis(1500)));
}

#[test]
#[serial]
fn given_max_notifications_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("EP_UI_MAX_NOTIFICATIONS", "11");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
