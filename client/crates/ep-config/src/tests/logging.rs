use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn test_log_level_parse_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG"), Ok(LogLevel(LevelFilter::Debug)));
    assert_eq!(LogLevel::from_str(" trace "), Ok(LogLevel(LevelFilter::Trace)));
}

#[test]
fn test_log_level_parse_rejects_unknown() {
    assert!(LogLevel::from_str("verbose").is_err());
}

#[test]
fn test_invalid_level_in_toml_falls_back_to_default() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"loud\"").unwrap();
    assert_eq!(wrapper.level, LogLevel::default());
}

#[test]
#[serial]
fn given_log_env_when_load_then_level_and_color_apply() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("EP_LOG_LEVEL", "debug");
    let _colored = EnvGuard::set("EP_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_invalid_log_level_env_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("EP_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level, eq(LogLevel::default()));
}
