use crate::tests::setup_config_dir;
use crate::{Config, ConfigError, LogLevel};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_unparseable_config_file_when_load_then_toml_error_names_file() {
    // Given
    let (temp, _env) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let error = Config::load().unwrap_err();

    // Then
    assert!(matches!(error, ConfigError::Toml { .. }));
    assert_that!(error.to_string(), contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_string_where_number_expected_when_load_then_error() {
    // Given
    let (temp, _env) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[ui]\nmax_notifications = \"three\"",
    )
    .unwrap();

    // When / Then
    assert_that!(Config::load(), err(anything()));
}

#[test]
#[serial]
fn given_out_of_range_value_in_file_when_load_then_only_validate_fails() {
    // Given
    let (temp, _env) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[ui]\nnotification_duration_ms = 10",
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_in_file_when_load_then_default_level() {
    // Given
    let (temp, _env) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[logging]\nlevel = \"shouty\"\ncolored = false",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.logging.level, eq(LogLevel::default()));
    assert_that!(config.logging.colored, eq(false));
}
