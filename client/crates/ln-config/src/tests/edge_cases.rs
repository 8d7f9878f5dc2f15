use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(crate::CONFIG_FILE_NAME),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_env_number_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("LN_PROVIDER_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.provider.timeout_secs,
        eq(crate::DEFAULT_PROVIDER_TIMEOUT_SECS)
    );
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("LN_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_demo_user_key_equal_to_session_key_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _demo_key = EnvGuard::set(
        "LN_STORAGE_DEMO_USER_KEY",
        crate::DEFAULT_PROVIDER_SESSION_KEY,
    );

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("provider.session_key"));
}

#[test]
#[serial]
fn given_colored_env_zero_when_load_then_colored_disabled() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _colored = EnvGuard::set("LN_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(!config.logging.colored);
}
